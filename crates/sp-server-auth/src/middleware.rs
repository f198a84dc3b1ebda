// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Credential header conventions.
//!
//! Two channels are supported:
//!
//! ```text
//! X-ADMIN-AUTH-SECRET: <secret>   → compared against the configured admin secret
//! X-USER-ID: <uuid>               → looked up in the user directory
//! ```
//!
//! Header values are never logged; the admin secret is wrapped in
//! [`SecretString`] as soon as it leaves the header map.

use http::HeaderMap;
use sp_common_page::{IdParseError, UserId};
use sp_common_secret::SecretString;
use tracing::instrument;

pub const ADMIN_SECRET_HEADER: &str = "x-admin-auth-secret";
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extract the admin secret presented by the caller.
///
/// Returns `None` if the header is absent, empty, or not valid ASCII.
#[instrument(level = "trace", skip_all)]
pub fn extract_admin_secret(headers: &HeaderMap) -> Option<SecretString> {
	let value = headers.get(ADMIN_SECRET_HEADER)?.to_str().ok()?;
	if value.is_empty() {
		return None;
	}
	Some(SecretString::new(value.to_string()))
}

/// Extract the user id presented by the caller.
///
/// `Ok(None)` when the header is absent or blank; `Err` when it is present
/// but not a valid id.
pub fn extract_user_id(headers: &HeaderMap) -> Result<Option<UserId>, IdParseError> {
	let Some(value) = headers.get(USER_ID_HEADER) else {
		return Ok(None);
	};
	let value = value.to_str().map_err(|_| IdParseError {
		kind: "user id",
		value: "<non-ascii header>".to_string(),
	})?;
	if value.trim().is_empty() {
		return Ok(None);
	}
	UserId::parse(value).map(Some)
}

/// Constant-time comparison of a presented secret with the configured one.
pub fn verify_admin_secret(configured: &SecretString, presented: &SecretString) -> bool {
	if configured.is_empty() {
		return false;
	}
	configured.matches(presented.expose())
}
