// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Deployment mode and admin secret.

use serde::Deserialize;
use sp_common_secret::SecretString;

use crate::error::ConfigError;

pub const LOCAL_DATACENTER: &str = "LOCAL";
/// Only ever used when the datacenter is [`LOCAL_DATACENTER`].
pub const DEFAULT_ADMIN_SECRET: &str = "DEFAULT_SECRET";
pub(crate) const ADMIN_SECRET_ENV: &str = "SP_SERVER_ADMIN_AUTH_SECRET";

#[derive(Debug, Clone)]
pub struct AuthConfig {
	pub datacenter: String,
	pub admin_secret: SecretString,
}

impl AuthConfig {
	pub fn is_local(&self) -> bool {
		self.datacenter.eq_ignore_ascii_case(LOCAL_DATACENTER)
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfigLayer {
	#[serde(default)]
	pub datacenter: Option<String>,
	#[serde(default)]
	pub admin_secret: Option<SecretString>,
}

impl AuthConfigLayer {
	pub fn merge(&mut self, other: AuthConfigLayer) {
		if other.datacenter.is_some() {
			self.datacenter = other.datacenter;
		}
		if other.admin_secret.is_some() {
			self.admin_secret = other.admin_secret;
		}
	}

	/// Resolve the admin secret. Outside the local datacenter it must be
	/// provisioned explicitly and must not be the built-in default.
	pub fn finalize(self) -> Result<AuthConfig, ConfigError> {
		let datacenter = self
			.datacenter
			.unwrap_or_else(|| LOCAL_DATACENTER.to_string());
		let is_local = datacenter.eq_ignore_ascii_case(LOCAL_DATACENTER);

		let admin_secret = match self.admin_secret {
			Some(secret) => secret,
			None if is_local => SecretString::new(DEFAULT_ADMIN_SECRET.to_string()),
			None => return Err(ConfigError::MissingEnvVar(ADMIN_SECRET_ENV.to_string())),
		};

		if admin_secret.is_empty() {
			return Err(ConfigError::Validation(
				"admin secret must not be empty".to_string(),
			));
		}
		if !is_local && admin_secret.matches(DEFAULT_ADMIN_SECRET) {
			return Err(ConfigError::Validation(format!(
				"the default admin secret may only be used in the {LOCAL_DATACENTER} datacenter"
			)));
		}

		Ok(AuthConfig {
			datacenter,
			admin_secret,
		})
	}
}
