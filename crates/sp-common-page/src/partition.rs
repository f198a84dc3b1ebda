// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page detail partitions.
//!
//! Clients send partitions as loosely typed JSON. [`parse_partitions`] is the
//! structural validity check: every element must decode into a known
//! [`Partition`] kind with no stray fields and pass its own content rules.
//! A single bad element rejects the whole sequence.

use serde::{Deserialize, Serialize};

pub const MAX_HEADING_LEVEL: u8 = 6;

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextPartition {
	pub text: String,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadingPartition {
	pub text: String,
	pub level: u8,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListPartition {
	pub items: Vec<String>,
	#[serde(default)]
	pub ordered: bool,
}

/// One content unit of a page detail.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase", deny_unknown_fields)]
pub enum Partition {
	Text(TextPartition),
	Heading(HeadingPartition),
	List(ListPartition),
	Divider,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
	#[error("partition {index} is malformed: {message}")]
	Malformed { index: usize, message: String },

	#[error("partition {index} is invalid: {message}")]
	Invalid { index: usize, message: String },
}

impl Partition {
	fn check(&self) -> Result<(), String> {
		match self {
			Partition::Heading(heading) if !(1..=MAX_HEADING_LEVEL).contains(&heading.level) => {
				Err(format!(
					"heading level must be between 1 and {MAX_HEADING_LEVEL}, got {}",
					heading.level
				))
			}
			_ => Ok(()),
		}
	}
}

/// Decode and validate raw partitions. All-or-nothing.
pub fn parse_partitions(raw: &[serde_json::Value]) -> Result<Vec<Partition>, PartitionError> {
	raw
		.iter()
		.enumerate()
		.map(|(index, value)| {
			let partition: Partition =
				serde_json::from_value(value.clone()).map_err(|e| PartitionError::Malformed {
					index,
					message: e.to_string(),
				})?;
			partition
				.check()
				.map_err(|message| PartitionError::Invalid { index, message })?;
			Ok(partition)
		})
		.collect()
}
