// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The resolved caller of a request.
//!
//! A request is in exactly one of three states:
//!
//! ```text
//! AuthContext { identity: None }                                   → not authenticated
//! AuthContext { identity: Some(Identity { is_admin: false, .. }) } → ordinary user
//! AuthContext { identity: Some(Identity { is_admin: true, .. }) }  → admin secret holder
//! ```

use serde::Serialize;
use sp_common_page::UserId;

/// Who is calling. Built once per request and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Identity {
	/// Set when the caller was resolved from the user directory.
	pub user_id: Option<UserId>,
	pub is_admin: bool,
}

impl Identity {
	/// The anonymous identity granted by a matching admin secret.
	pub fn admin() -> Self {
		Self {
			user_id: None,
			is_admin: true,
		}
	}

	pub fn user(user_id: UserId) -> Self {
		Self {
			user_id: Some(user_id),
			is_admin: false,
		}
	}

	pub fn method(&self) -> AuthMethod {
		if self.is_admin {
			AuthMethod::AdminSecret
		} else {
			AuthMethod::UserHeader
		}
	}
}

/// Which credential channel produced the identity. Recorded on request spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
	AdminSecret,
	UserHeader,
	None,
}

impl AuthMethod {
	pub fn as_str(&self) -> &'static str {
		match self {
			AuthMethod::AdminSecret => "admin_secret",
			AuthMethod::UserHeader => "user_header",
			AuthMethod::None => "none",
		}
	}
}

/// Auth state carried in request extensions.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
	pub identity: Option<Identity>,
}

impl AuthContext {
	pub fn unauthenticated() -> Self {
		Self { identity: None }
	}

	pub fn authenticated(identity: Identity) -> Self {
		Self {
			identity: Some(identity),
		}
	}

	pub fn is_authenticated(&self) -> bool {
		self.identity.is_some()
	}

	pub fn method(&self) -> AuthMethod {
		self
			.identity
			.map(|identity| identity.method())
			.unwrap_or(AuthMethod::None)
	}
}
