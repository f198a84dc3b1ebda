// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Secret loading with `*_FILE` support.
//!
//! For a variable `NAME`, `NAME_FILE` (a path, e.g. a mounted Kubernetes
//! secret) takes precedence over `NAME` itself. One trailing newline is
//! stripped from file contents.

use std::path::PathBuf;

use sp_common_secret::SecretString;

#[derive(Debug, thiserror::Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file {path} (from {var}_FILE): {source}")]
	FileRead {
		var: String,
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Load an optional secret from `var` or `var_FILE`.
pub fn load_secret_env(var: &str) -> Result<Option<SecretString>, SecretEnvError> {
	let file_var = format!("{var}_FILE");
	if let Some(path) = std::env::var_os(&file_var).filter(|p| !p.is_empty()) {
		let path = PathBuf::from(path);
		let mut content = std::fs::read_to_string(&path).map_err(|source| SecretEnvError::FileRead {
			var: var.to_string(),
			path: path.clone(),
			source,
		})?;
		if content.ends_with('\n') {
			content.pop();
			if content.ends_with('\r') {
				content.pop();
			}
		}
		return Ok(Some(SecretString::new(content)));
	}

	Ok(std::env::var(var)
		.ok()
		.filter(|v| !v.is_empty())
		.map(SecretString::new))
}
