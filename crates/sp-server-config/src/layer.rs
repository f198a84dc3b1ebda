// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::Deserialize;

use crate::sections::{
	AuthConfigLayer, CorsConfigLayer, DatabaseConfigLayer, HttpConfigLayer, LoggingConfigLayer,
	PagesConfigLayer, PathsConfigLayer,
};

/// One source's partial view of the configuration. Mirrors the TOML layout:
///
/// ```toml
/// [http]
/// port = 8782
///
/// [pages]
/// batch_size = 50
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub database: Option<DatabaseConfigLayer>,
	#[serde(default)]
	pub auth: Option<AuthConfigLayer>,
	#[serde(default)]
	pub pages: Option<PagesConfigLayer>,
	#[serde(default)]
	pub cors: Option<CorsConfigLayer>,
	#[serde(default)]
	pub paths: Option<PathsConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

macro_rules! merge_section {
	($self:ident, $other:ident, $($field:ident),+) => {
		$(merge_option(&mut $self.$field, $other.$field, |a, b| a.merge(b));)+
	};
}

impl ServerConfigLayer {
	/// Fields set in `other` override fields set in `self`.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		merge_section!(self, other, http, database, auth, pages, cors, paths, logging);
	}
}

fn merge_option<T>(target: &mut Option<T>, other: Option<T>, merge: impl FnOnce(&mut T, T)) {
	match (target.as_mut(), other) {
		(Some(existing), Some(incoming)) => merge(existing, incoming),
		(None, Some(incoming)) => *target = Some(incoming),
		(_, None) => {}
	}
}
