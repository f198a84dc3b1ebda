// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! UUID-backed identifier newtypes.
//!
//! Each entity gets its own type so a page guid can never be passed where a
//! user id is expected. All of them serialize as plain UUID strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Error returned when a path or header value is not a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value}")]
pub struct IdParseError {
	pub kind: &'static str,
	pub value: String,
}

macro_rules! define_id_type {
	($name:ident, $kind:literal, $doc:expr) => {
		#[doc = $doc]
		#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(Uuid);

		impl $name {
			pub fn new(id: Uuid) -> Self {
				Self(id)
			}

			/// Generate a new random (v4) id.
			pub fn generate() -> Self {
				Self(Uuid::new_v4())
			}

			pub fn as_uuid(&self) -> &Uuid {
				&self.0
			}

			pub fn parse(value: &str) -> Result<Self, IdParseError> {
				Uuid::parse_str(value.trim())
					.map(Self)
					.map_err(|_| IdParseError {
						kind: $kind,
						value: value.to_string(),
					})
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}", self.0)
			}
		}

		impl FromStr for $name {
			type Err = IdParseError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::parse(s)
			}
		}

		impl From<Uuid> for $name {
			fn from(id: Uuid) -> Self {
				Self(id)
			}
		}

		impl From<$name> for Uuid {
			fn from(id: $name) -> Self {
				id.0
			}
		}
	};
}

define_id_type!(PageGuid, "page id", "Globally unique identifier of a page.");
define_id_type!(
	PageDetailGuid,
	"page detail id",
	"Identifier of a page's detail record."
);
define_id_type!(
	PageTemplateGuid,
	"page template id",
	"Identifier of a page template."
);
define_id_type!(VersionGuid, "version id", "Identifier of a version.");
define_id_type!(UserId, "user id", "Identifier of a user in the user directory.");
