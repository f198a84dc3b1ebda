// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct PathsConfig {
	/// Directory served for paths no route matches.
	pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfigLayer {
	#[serde(default)]
	pub static_dir: Option<String>,
}

impl PathsConfigLayer {
	pub fn merge(&mut self, other: PathsConfigLayer) {
		if other.static_dir.is_some() {
			self.static_dir = other.static_dir;
		}
	}

	pub fn finalize(self) -> PathsConfig {
		PathsConfig {
			static_dir: self.static_dir.map(PathBuf::from),
		}
	}
}
