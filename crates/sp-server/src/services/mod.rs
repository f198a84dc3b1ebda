// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Business logic behind the HTTP handlers.

pub mod detail;
pub mod health;
pub mod pages;
pub mod permissions;
pub mod properties;

#[cfg(test)]
pub(crate) mod mock;

pub use health::check_health;
pub use pages::{
	GuidGenerator, PageService, PageSettings, PageStores, UuidGuidGenerator, MAX_SUMMARY_LEN,
	MAX_TITLE_LEN,
};
pub use permissions::{PermissionEngine, StorePermissionEngine};
