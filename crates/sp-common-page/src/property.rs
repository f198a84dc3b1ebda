// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Free-form key/value properties attached to a page.
//!
//! A page's properties are an ordered list that is always read and replaced
//! as a whole. Keys are unique within a page.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const MAX_PROPERTIES: usize = 64;
pub const MAX_PROPERTY_KEY_LEN: usize = 128;
pub const MAX_PROPERTY_VALUE_LEN: usize = 4096;

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageProperty {
	pub key: String,
	#[serde(default)]
	pub value: String,
}

impl PageProperty {
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
	#[error("a page may carry at most {max} properties, got {0}", max = MAX_PROPERTIES)]
	TooMany(usize),

	#[error("property {index} has a blank key")]
	BlankKey { index: usize },

	#[error("property {index} key exceeds {max} characters", max = MAX_PROPERTY_KEY_LEN)]
	KeyTooLong { index: usize },

	#[error("property {index} value exceeds {max} characters", max = MAX_PROPERTY_VALUE_LEN)]
	ValueTooLong { index: usize },

	#[error("duplicate property key: {0}")]
	DuplicateKey(String),
}

/// Check a full replacement set. All-or-nothing.
pub fn validate_properties(properties: &[PageProperty]) -> Result<(), PropertyError> {
	if properties.len() > MAX_PROPERTIES {
		return Err(PropertyError::TooMany(properties.len()));
	}

	let mut seen = HashSet::with_capacity(properties.len());
	for (index, property) in properties.iter().enumerate() {
		if property.key.trim().is_empty() {
			return Err(PropertyError::BlankKey { index });
		}
		if property.key.chars().count() > MAX_PROPERTY_KEY_LEN {
			return Err(PropertyError::KeyTooLong { index });
		}
		if property.value.chars().count() > MAX_PROPERTY_VALUE_LEN {
			return Err(PropertyError::ValueTooLong { index });
		}
		if !seen.insert(property.key.as_str()) {
			return Err(PropertyError::DuplicateKey(property.key.clone()));
		}
	}
	Ok(())
}
