// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Domain model shared by the page service crates.
//!
//! - [`Page`] and its access attributes ([`PageAccess`], [`PermissionType`])
//! - [`PageDetail`] and its ordered [`Partition`]s
//! - free-form [`PageProperty`] key/values
//! - referenced entities: [`PageTemplate`], [`Version`], [`User`]
//! - UUID-backed id newtypes ([`PageGuid`], [`UserId`], ...)

pub mod detail;
pub mod ids;
pub mod page;
pub mod partition;
pub mod property;
pub mod reference;

pub use detail::PageDetail;
pub use ids::{IdParseError, PageDetailGuid, PageGuid, PageTemplateGuid, UserId, VersionGuid};
pub use page::{Page, PageAccess, PermissionType, PermissionTypeParseError};
pub use partition::{
	parse_partitions, HeadingPartition, ListPartition, Partition, PartitionError, TextPartition,
};
pub use property::{validate_properties, PageProperty, PropertyError};
pub use reference::{PageTemplate, User, Version};
