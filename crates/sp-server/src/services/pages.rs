// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Page orchestration: create, update, remove, read and list.
//!
//! Every operation takes the caller's [`Identity`] explicitly. Permission
//! checks complete before any write is issued, and body validation completes
//! before any store is touched.

use std::sync::Arc;

use chrono::Utc;
use sp_common_page::{Page, PageDetail, PageGuid, PageTemplateGuid, VersionGuid};
use sp_server_api::{
	CreatePageRequest, EntirePageResponse, ListPagesResponse, NextBatch, PageResponse,
	UpdatePageRequest,
};
use sp_server_auth::{Identity, PageAction};
use sp_server_db::{
	DbError, PageDetailStore, PageStore, PageTemplateStore, PageVisibility, VersionStore,
};
use tracing::instrument;

use super::permissions::PermissionEngine;
use crate::error::ServerError;
use crate::pagination::{decode_cursor, encode_cursor};

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_SUMMARY_LEN: usize = 4096;

/// Source of candidate page guids.
pub trait GuidGenerator: Send + Sync {
	fn generate(&self) -> PageGuid;
}

/// Random v4 guids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGuidGenerator;

impl GuidGenerator for UuidGuidGenerator {
	fn generate(&self) -> PageGuid {
		PageGuid::generate()
	}
}

#[derive(Debug, Clone, Copy)]
pub struct PageSettings {
	/// Pages returned per listing call.
	pub batch_size: u32,
	/// Guid candidates tried before giving up on a create.
	pub guid_attempts: u32,
}

/// The storage collaborators a [`PageService`] works against.
#[derive(Clone)]
pub struct PageStores {
	pub pages: Arc<dyn PageStore>,
	pub details: Arc<dyn PageDetailStore>,
	pub templates: Arc<dyn PageTemplateStore>,
	pub versions: Arc<dyn VersionStore>,
}

pub struct PageService {
	pub(super) stores: PageStores,
	pub(super) permissions: Arc<dyn PermissionEngine>,
	guids: Arc<dyn GuidGenerator>,
	settings: PageSettings,
}

fn validate_title(title: &str) -> Result<(), ServerError> {
	if title.trim().is_empty() {
		return Err(ServerError::ValidationFailed("title is required".to_string()));
	}
	if title.chars().count() > MAX_TITLE_LEN {
		return Err(ServerError::ValidationFailed(format!(
			"title must be at most {MAX_TITLE_LEN} characters"
		)));
	}
	Ok(())
}

fn validate_summary(summary: &str) -> Result<(), ServerError> {
	if summary.chars().count() > MAX_SUMMARY_LEN {
		return Err(ServerError::ValidationFailed(format!(
			"summary must be at most {MAX_SUMMARY_LEN} characters"
		)));
	}
	Ok(())
}

/// Check the fields shared by page and page detail bodies.
pub(super) fn validate_title_and_summary(title: &str, summary: &str) -> Result<(), ServerError> {
	validate_title(title)?;
	validate_summary(summary)
}

impl PageService {
	pub fn new(
		stores: PageStores,
		permissions: Arc<dyn PermissionEngine>,
		settings: PageSettings,
	) -> Self {
		Self {
			stores,
			permissions,
			guids: Arc::new(UuidGuidGenerator),
			settings,
		}
	}

	pub fn with_guid_generator(mut self, guids: Arc<dyn GuidGenerator>) -> Self {
		self.guids = guids;
		self
	}

	/// Fail with `NotAuthorized` unless the identity may perform `action`.
	pub(super) async fn require(
		&self,
		identity: &Identity,
		guid: &PageGuid,
		action: PageAction,
	) -> Result<(), ServerError> {
		let allowed = match action {
			PageAction::Read => self.permissions.can_read(identity, guid).await?,
			PageAction::Edit => self.permissions.can_edit(identity, guid).await?,
		};
		if allowed {
			Ok(())
		} else {
			tracing::info!(page_guid = %guid, ?action, "page access denied");
			Err(ServerError::NotAuthorized)
		}
	}

	/// Unknown references are a validation failure on write.
	async fn check_references(
		&self,
		template: Option<PageTemplateGuid>,
		version: Option<VersionGuid>,
	) -> Result<(), ServerError> {
		if let Some(guid) = template {
			if self.stores.templates.get_template(&guid).await?.is_none() {
				return Err(ServerError::ValidationFailed(format!(
					"unknown page template: {guid}"
				)));
			}
		}
		if let Some(guid) = version {
			if self.stores.versions.get_version(&guid).await?.is_none() {
				return Err(ServerError::ValidationFailed(format!("unknown version: {guid}")));
			}
		}
		Ok(())
	}

	/// Reduced view with references resolved. Dangling references become `None`.
	async fn present(&self, page: Page) -> Result<PageResponse, ServerError> {
		let template = match page.template_guid {
			Some(guid) => self.stores.templates.get_template(&guid).await?,
			None => None,
		};
		let version = match page.version_guid {
			Some(guid) => self.stores.versions.get_version(&guid).await?,
			None => None,
		};
		Ok(PageResponse::new(page, template, version))
	}

	async fn load(&self, guid: &PageGuid) -> Result<Page, ServerError> {
		self
			.stores
			.pages
			.get_page(guid)
			.await?
			.ok_or_else(|| ServerError::NotFound("page not found".to_string()))
	}

	#[instrument(skip(self, identity, request), fields(user_id = ?identity.user_id))]
	pub async fn create_page(
		&self,
		identity: &Identity,
		request: CreatePageRequest,
	) -> Result<PageGuid, ServerError> {
		validate_title_and_summary(&request.title, &request.summary)?;
		let (template_guid, version_guid) = request.references()?;
		let owner_id = identity.user_id.ok_or(ServerError::NotAuthorized)?;
		self.check_references(template_guid, version_guid).await?;

		let attempts = self.settings.guid_attempts;
		for attempt in 1..=attempts {
			let guid = self.guids.generate();
			if self.stores.pages.is_guid_taken(&guid).await? {
				tracing::debug!(attempt, page_guid = %guid, "page guid collision");
				continue;
			}

			let now = Utc::now();
			let page = Page {
				guid,
				title: request.title.clone(),
				summary: request.summary.clone(),
				owner_id,
				permission_type: request.permission_type,
				template_guid,
				version_guid,
				created_at: now,
				updated_at: now,
			};
			let detail = PageDetail::empty_for(guid, &page.title, now);

			match self.stores.pages.create_page(&page, &detail).await {
				Ok(()) => {
					tracing::info!(page_guid = %guid, owner_id = %owner_id, "page created");
					return Ok(guid);
				}
				Err(DbError::Conflict(_)) => {
					tracing::debug!(attempt, page_guid = %guid, "page guid taken on insert");
				}
				Err(e) => return Err(e.into()),
			}
		}

		tracing::warn!(attempts, "exhausted page guid attempts");
		Err(ServerError::DuplicateEntry(format!(
			"could not allocate a unique page id after {attempts} attempts"
		)))
	}

	#[instrument(skip(self, identity, request), fields(page_guid = %guid, user_id = ?identity.user_id))]
	pub async fn update_page(
		&self,
		identity: &Identity,
		guid: &PageGuid,
		request: UpdatePageRequest,
	) -> Result<(), ServerError> {
		if let Some(title) = &request.title {
			validate_title(title)?;
		}
		if let Some(summary) = &request.summary {
			validate_summary(summary)?;
		}
		let (template_change, version_change) = request.references()?;
		self.require(identity, guid, PageAction::Edit).await?;
		self
			.check_references(template_change.flatten(), version_change.flatten())
			.await?;

		let mut page = self.load(guid).await?;
		if let Some(title) = request.title {
			page.title = title;
		}
		if let Some(summary) = request.summary {
			page.summary = summary;
		}
		if let Some(permission_type) = request.permission_type {
			page.permission_type = permission_type;
		}
		if let Some(template_guid) = template_change {
			page.template_guid = template_guid;
		}
		if let Some(version_guid) = version_change {
			page.version_guid = version_guid;
		}
		page.updated_at = Utc::now();

		self.stores.pages.update_page(&page).await?;
		tracing::info!("page updated");
		Ok(())
	}

	#[instrument(skip(self, identity), fields(page_guid = %guid, user_id = ?identity.user_id))]
	pub async fn remove_page(&self, identity: &Identity, guid: &PageGuid) -> Result<(), ServerError> {
		self.require(identity, guid, PageAction::Edit).await?;
		self.stores.pages.delete_page(guid).await?;
		tracing::info!("page removed");
		Ok(())
	}

	#[instrument(skip(self, identity), fields(page_guid = %guid, user_id = ?identity.user_id))]
	pub async fn get_page(
		&self,
		identity: &Identity,
		guid: &PageGuid,
	) -> Result<PageResponse, ServerError> {
		self.require(identity, guid, PageAction::Read).await?;
		let page = self.load(guid).await?;
		self.present(page).await
	}

	#[instrument(skip(self, identity), fields(page_guid = %guid, user_id = ?identity.user_id))]
	pub async fn get_entire_page(
		&self,
		identity: &Identity,
		guid: &PageGuid,
	) -> Result<EntirePageResponse, ServerError> {
		self.require(identity, guid, PageAction::Read).await?;
		let page = self.load(guid).await?;
		let detail = self.stores.details.get_detail_for_page(guid).await?;
		Ok(EntirePageResponse {
			page: self.present(page).await?,
			detail: detail.map(Into::into),
		})
	}

	/// One batch of the caller's visible pages, ordered by guid.
	#[instrument(skip(self, identity, token), fields(user_id = ?identity.user_id))]
	pub async fn get_pages(
		&self,
		identity: &Identity,
		token: Option<&str>,
	) -> Result<ListPagesResponse, ServerError> {
		let after = decode_cursor(token)?;
		let visibility = visibility_for(identity)?;
		let batch_size = self.settings.batch_size as usize;

		let mut pages = self
			.stores
			.pages
			.list_pages(visibility, after, self.settings.batch_size + 1)
			.await?;
		let has_more = pages.len() > batch_size;
		pages.truncate(batch_size);

		let next_batch = match pages.last() {
			Some(last) if has_more => Some(NextBatch::new(encode_cursor(&last.guid))),
			_ => None,
		};
		let total = self.stores.pages.count_pages(visibility).await?;

		let mut batch = Vec::with_capacity(pages.len());
		for page in pages {
			batch.push(self.present(page).await?);
		}

		tracing::debug!(returned = batch.len(), total, has_more, "listed pages");
		Ok(ListPagesResponse {
			batch,
			total,
			next_batch,
		})
	}
}

fn visibility_for(identity: &Identity) -> Result<PageVisibility, ServerError> {
	if identity.is_admin {
		return Ok(PageVisibility::All);
	}
	identity
		.user_id
		.map(PageVisibility::ReadableBy)
		.ok_or(ServerError::Unauthenticated)
}
