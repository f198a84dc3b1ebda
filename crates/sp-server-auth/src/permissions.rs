// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page permission policy.
//!
//! [`is_allowed`] is a pure function over the caller's [`Identity`] and the
//! page's [`PageAccess`] attributes. It is evaluated in two phases:
//!
//! 1. **Global role check**: the admin secret holder may do anything
//! 2. **Page policy**: owners may do anything; everyone else is governed by
//!    the page's [`PermissionType`](sp_common_page::PermissionType)
//!
//! | caller     | private     | public      | shared      |
//! |------------|-------------|-------------|-------------|
//! | owner      | read + edit | read + edit | read + edit |
//! | other user | -           | read        | read + edit |
//! | admin      | read + edit | read + edit | read + edit |

use sp_common_page::PageAccess;
use tracing::instrument;

use crate::identity::Identity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageAction {
	Read,
	/// Covers update, detail update and delete.
	Edit,
}

#[instrument(
	level = "debug",
	skip(identity, page),
	fields(
		user_id = ?identity.user_id,
		is_admin = identity.is_admin,
		permission_type = %page.permission_type,
	)
)]
pub fn is_allowed(identity: &Identity, action: PageAction, page: &PageAccess) -> bool {
	if identity.is_admin {
		return true;
	}

	let Some(user_id) = identity.user_id else {
		return false;
	};

	if page.is_owned_by(&user_id) {
		return true;
	}

	match action {
		PageAction::Read => page.permission_type.grants_non_owner_read(),
		PageAction::Edit => page.permission_type.grants_non_owner_edit(),
	}
}
