// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Resource-level permission checks.

use std::sync::Arc;

use async_trait::async_trait;
use sp_common_page::PageGuid;
use sp_server_auth::{is_allowed, Identity, PageAction};
use sp_server_db::PageStore;

use crate::error::ServerError;

/// Answers whether an identity may read or edit a page.
///
/// A page that does not exist is neither readable nor editable.
#[async_trait]
pub trait PermissionEngine: Send + Sync {
	async fn can_read(&self, identity: &Identity, page: &PageGuid) -> Result<bool, ServerError>;
	async fn can_edit(&self, identity: &Identity, page: &PageGuid) -> Result<bool, ServerError>;
}

/// Evaluates the permission policy against ownership data held in the page store.
#[derive(Clone)]
pub struct StorePermissionEngine {
	pages: Arc<dyn PageStore>,
}

impl StorePermissionEngine {
	pub fn new(pages: Arc<dyn PageStore>) -> Self {
		Self { pages }
	}

	async fn check(
		&self,
		identity: &Identity,
		page: &PageGuid,
		action: PageAction,
	) -> Result<bool, ServerError> {
		let allowed = match self.pages.get_page_access(page).await? {
			Some(access) => is_allowed(identity, action, &access),
			None => false,
		};
		tracing::debug!(page_guid = %page, ?action, allowed, "permission check");
		Ok(allowed)
	}
}

#[async_trait]
impl PermissionEngine for StorePermissionEngine {
	async fn can_read(&self, identity: &Identity, page: &PageGuid) -> Result<bool, ServerError> {
		self.check(identity, page, PageAction::Read).await
	}

	async fn can_edit(&self, identity: &Identity, page: &PageGuid) -> Result<bool, ServerError> {
		self.check(identity, page, PageAction::Edit).await
	}
}
