// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authentication and page access policy for sp-server.
//!
//! - [`Identity`] / [`AuthContext`]: the resolved caller of one request
//! - [`middleware`]: credential header conventions and extraction helpers
//! - [`permissions`]: the pure read/edit policy evaluated per page

pub mod identity;
pub mod middleware;
pub mod permissions;

pub use identity::{AuthContext, AuthMethod, Identity};
pub use middleware::{
	extract_admin_secret, extract_user_id, verify_admin_secret, ADMIN_SECRET_HEADER, USER_ID_HEADER,
};
pub use permissions::{is_allowed, PageAction};
