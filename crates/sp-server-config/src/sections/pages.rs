// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page listing and creation limits.

use serde::Deserialize;

use crate::error::ConfigError;

const DEFAULT_BATCH_SIZE: u32 = 20;
const DEFAULT_GUID_ATTEMPTS: u32 = 5;
pub const MAX_BATCH_SIZE: u32 = 500;

#[derive(Debug, Clone)]
pub struct PagesConfig {
	/// Fixed number of pages per listing batch.
	pub batch_size: u32,
	/// Guid candidates tried before a create gives up.
	pub guid_attempts: u32,
}

impl Default for PagesConfig {
	fn default() -> Self {
		Self {
			batch_size: DEFAULT_BATCH_SIZE,
			guid_attempts: DEFAULT_GUID_ATTEMPTS,
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PagesConfigLayer {
	#[serde(default)]
	pub batch_size: Option<u32>,
	#[serde(default)]
	pub guid_attempts: Option<u32>,
}

impl PagesConfigLayer {
	pub fn merge(&mut self, other: PagesConfigLayer) {
		if other.batch_size.is_some() {
			self.batch_size = other.batch_size;
		}
		if other.guid_attempts.is_some() {
			self.guid_attempts = other.guid_attempts;
		}
	}

	pub fn finalize(self) -> Result<PagesConfig, ConfigError> {
		let batch_size = self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE);
		if batch_size == 0 || batch_size > MAX_BATCH_SIZE {
			return Err(ConfigError::InvalidValue {
				key: "pages.batch_size".to_string(),
				message: format!("must be between 1 and {MAX_BATCH_SIZE}, got {batch_size}"),
			});
		}

		let guid_attempts = self.guid_attempts.unwrap_or(DEFAULT_GUID_ATTEMPTS);
		if guid_attempts == 0 {
			return Err(ConfigError::InvalidValue {
				key: "pages.guid_attempts".to_string(),
				message: "must be at least 1".to_string(),
			});
		}

		Ok(PagesConfig {
			batch_size,
			guid_attempts,
		})
	}
}
