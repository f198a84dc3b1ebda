// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Build information for sp-server.

/// Crate version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit the binary was built from, when the build exported `GIT_SHA`.
pub fn git_sha() -> &'static str {
	option_env!("GIT_SHA").unwrap_or("unknown")
}

/// Format version info for display.
pub fn format_version_info() -> String {
	format!(
		"sp-server version: {}\n\
         Git SHA:           {}\n\
         Platform:          {}-{}",
		VERSION,
		git_sha(),
		std::env::consts::OS,
		std::env::consts::ARCH,
	)
}
