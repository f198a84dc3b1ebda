// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pages and their access attributes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ids::{PageGuid, PageTemplateGuid, UserId, VersionGuid};

/// Policy tag controlling what non-owners may do with a page.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionType {
	/// Only the owner may read or edit.
	#[default]
	Private,
	/// Any authenticated user may read; only the owner may edit.
	Public,
	/// Any authenticated user may read and edit.
	Shared,
}

impl PermissionType {
	pub const ALL: [PermissionType; 3] = [Self::Private, Self::Public, Self::Shared];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Private => "private",
			Self::Public => "public",
			Self::Shared => "shared",
		}
	}

	/// Whether users other than the owner may read pages with this tag.
	pub fn grants_non_owner_read(&self) -> bool {
		matches!(self, Self::Public | Self::Shared)
	}

	/// Whether users other than the owner may edit pages with this tag.
	pub fn grants_non_owner_edit(&self) -> bool {
		matches!(self, Self::Shared)
	}
}

impl fmt::Display for PermissionType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown permission type: {0}")]
pub struct PermissionTypeParseError(pub String);

impl FromStr for PermissionType {
	type Err = PermissionTypeParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"private" => Ok(Self::Private),
			"public" => Ok(Self::Public),
			"shared" => Ok(Self::Shared),
			other => Err(PermissionTypeParseError(other.to_string())),
		}
	}
}

/// A page as persisted, without its detail body.
///
/// `guid` and `owner_id` are fixed at creation; updates never touch them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
	pub guid: PageGuid,
	pub title: String,
	pub summary: String,
	pub owner_id: UserId,
	pub permission_type: PermissionType,
	pub template_guid: Option<PageTemplateGuid>,
	pub version_guid: Option<VersionGuid>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl Page {
	pub fn access(&self) -> PageAccess {
		PageAccess {
			owner_id: self.owner_id,
			permission_type: self.permission_type,
		}
	}
}

/// The attributes a permission decision is made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAccess {
	pub owner_id: UserId,
	pub permission_type: PermissionType,
}

impl PageAccess {
	pub fn is_owned_by(&self, user_id: &UserId) -> bool {
		&self.owner_id == user_id
	}
}
