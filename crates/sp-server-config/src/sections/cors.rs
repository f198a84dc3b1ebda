// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! CORS origins. Only applied in the local datacenter.

use serde::Deserialize;

const DEFAULT_ALLOWED_ORIGIN: &str = "http://127.0.0.1:8081";

#[derive(Debug, Clone)]
pub struct CorsConfig {
	pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
	fn default() -> Self {
		Self {
			allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfigLayer {
	#[serde(default)]
	pub allowed_origins: Option<Vec<String>>,
}

impl CorsConfigLayer {
	pub fn merge(&mut self, other: CorsConfigLayer) {
		if other.allowed_origins.is_some() {
			self.allowed_origins = other.allowed_origins;
		}
	}

	pub fn finalize(self) -> CorsConfig {
		match self.allowed_origins {
			Some(origins) => CorsConfig {
				allowed_origins: origins,
			},
			None => CorsConfig::default(),
		}
	}
}
