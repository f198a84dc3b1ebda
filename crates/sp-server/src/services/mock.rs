// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! In-memory stores for service tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use sp_common_page::{
	Page, PageAccess, PageDetail, PageDetailGuid, PageGuid, PageProperty, PageTemplate,
	PageTemplateGuid, PermissionType, UserId, Version, VersionGuid,
};
use sp_server_db::{
	DbError, PageDetailStore, PageStore, PageTemplateStore, PageVisibility, VersionStore,
};

use super::pages::GuidGenerator;

pub fn sample_page(owner: UserId, permission_type: PermissionType) -> Page {
	let now = Utc::now();
	Page {
		guid: PageGuid::generate(),
		title: "Sample".to_string(),
		summary: String::new(),
		owner_id: owner,
		permission_type,
		template_guid: None,
		version_guid: None,
		created_at: now,
		updated_at: now,
	}
}

/// Pages, details, properties, templates and versions, plus call counters.
#[derive(Default)]
pub struct MockPageStore {
	pages: Mutex<HashMap<PageGuid, Page>>,
	details: Mutex<HashMap<PageDetailGuid, PageDetail>>,
	properties: Mutex<HashMap<PageGuid, Vec<PageProperty>>>,
	templates: Mutex<HashMap<PageTemplateGuid, PageTemplate>>,
	versions: Mutex<HashMap<VersionGuid, Version>>,
	/// Guids the uniqueness oracle reports as taken without a stored page.
	taken: Mutex<HashSet<PageGuid>>,
	/// Stored guids the uniqueness oracle fails to see, as in a concurrent insert.
	unseen: Mutex<HashSet<PageGuid>>,
	pub guid_checks: AtomicUsize,
	pub writes: AtomicUsize,
}

impl MockPageStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Store pages with empty details.
	pub fn with_pages(pages: Vec<Page>) -> Self {
		let store = Self::new();
		for page in pages {
			store.insert_page(page);
		}
		store
	}

	pub fn insert_page(&self, page: Page) -> PageDetail {
		let detail = PageDetail::empty_for(page.guid, &page.title, page.created_at);
		self
			.details
			.lock()
			.unwrap()
			.insert(detail.guid, detail.clone());
		self.pages.lock().unwrap().insert(page.guid, page);
		detail
	}

	pub fn insert_template(&self, template: PageTemplate) {
		self.templates.lock().unwrap().insert(template.guid, template);
	}

	pub fn insert_version(&self, version: Version) {
		self.versions.lock().unwrap().insert(version.guid, version);
	}

	pub fn mark_taken(&self, guid: PageGuid) {
		self.taken.lock().unwrap().insert(guid);
	}

	pub fn hide_from_oracle(&self, guid: PageGuid) {
		self.unseen.lock().unwrap().insert(guid);
	}

	pub fn page(&self, guid: &PageGuid) -> Option<Page> {
		self.pages.lock().unwrap().get(guid).cloned()
	}

	pub fn detail(&self, guid: &PageDetailGuid) -> Option<PageDetail> {
		self.details.lock().unwrap().get(guid).cloned()
	}

	pub fn page_count(&self) -> usize {
		self.pages.lock().unwrap().len()
	}

	pub fn properties(&self, guid: &PageGuid) -> Vec<PageProperty> {
		self
			.properties
			.lock()
			.unwrap()
			.get(guid)
			.cloned()
			.unwrap_or_default()
	}

	pub fn detail_count(&self) -> usize {
		self.details.lock().unwrap().len()
	}

	fn visible(&self, visibility: PageVisibility) -> Vec<Page> {
		let mut pages: Vec<Page> = self
			.pages
			.lock()
			.unwrap()
			.values()
			.filter(|p| match visibility {
				PageVisibility::All => true,
				PageVisibility::ReadableBy(user) => {
					p.owner_id == user || p.permission_type.grants_non_owner_read()
				}
			})
			.cloned()
			.collect();
		pages.sort_by_key(|p| p.guid);
		pages
	}
}

#[async_trait]
impl PageStore for MockPageStore {
	async fn is_guid_taken(&self, guid: &PageGuid) -> Result<bool, DbError> {
		self.guid_checks.fetch_add(1, Ordering::SeqCst);
		if self.unseen.lock().unwrap().contains(guid) {
			return Ok(false);
		}
		Ok(self.taken.lock().unwrap().contains(guid) || self.pages.lock().unwrap().contains_key(guid))
	}

	async fn create_page(&self, page: &Page, detail: &PageDetail) -> Result<(), DbError> {
		let mut pages = self.pages.lock().unwrap();
		if pages.contains_key(&page.guid) {
			return Err(DbError::Conflict("page already exists".to_string()));
		}
		self.writes.fetch_add(1, Ordering::SeqCst);
		pages.insert(page.guid, page.clone());
		self
			.details
			.lock()
			.unwrap()
			.insert(detail.guid, detail.clone());
		Ok(())
	}

	async fn update_page(&self, page: &Page) -> Result<(), DbError> {
		let mut pages = self.pages.lock().unwrap();
		let existing = pages
			.get_mut(&page.guid)
			.ok_or_else(|| DbError::NotFound("page not found".to_string()))?;
		self.writes.fetch_add(1, Ordering::SeqCst);
		let owner_id = existing.owner_id;
		let created_at = existing.created_at;
		*existing = page.clone();
		existing.owner_id = owner_id;
		existing.created_at = created_at;
		Ok(())
	}

	async fn delete_page(&self, guid: &PageGuid) -> Result<(), DbError> {
		let mut pages = self.pages.lock().unwrap();
		if pages.remove(guid).is_none() {
			return Err(DbError::NotFound("page not found".to_string()));
		}
		self.writes.fetch_add(1, Ordering::SeqCst);
		self
			.details
			.lock()
			.unwrap()
			.retain(|_, d| &d.page_guid != guid);
		self.properties.lock().unwrap().remove(guid);
		Ok(())
	}

	async fn get_page(&self, guid: &PageGuid) -> Result<Option<Page>, DbError> {
		Ok(self.page(guid))
	}

	async fn get_page_access(&self, guid: &PageGuid) -> Result<Option<PageAccess>, DbError> {
		Ok(self.page(guid).map(|p| p.access()))
	}

	async fn list_pages(
		&self,
		visibility: PageVisibility,
		after: Option<PageGuid>,
		limit: u32,
	) -> Result<Vec<Page>, DbError> {
		Ok(self
			.visible(visibility)
			.into_iter()
			.filter(|p| after.map_or(true, |a| p.guid > a))
			.take(limit as usize)
			.collect())
	}

	async fn count_pages(&self, visibility: PageVisibility) -> Result<u64, DbError> {
		Ok(self.visible(visibility).len() as u64)
	}

	async fn get_page_properties(&self, guid: &PageGuid) -> Result<Vec<PageProperty>, DbError> {
		Ok(self.properties(guid))
	}

	async fn replace_page_properties(
		&self,
		guid: &PageGuid,
		properties: &[PageProperty],
	) -> Result<(), DbError> {
		if !self.pages.lock().unwrap().contains_key(guid) {
			return Err(DbError::NotFound("page not found".to_string()));
		}
		self.writes.fetch_add(1, Ordering::SeqCst);
		self
			.properties
			.lock()
			.unwrap()
			.insert(*guid, properties.to_vec());
		Ok(())
	}
}

#[async_trait]
impl PageDetailStore for MockPageStore {
	async fn get_detail(&self, guid: &PageDetailGuid) -> Result<Option<PageDetail>, DbError> {
		Ok(self.detail(guid))
	}

	async fn get_detail_for_page(
		&self,
		page_guid: &PageGuid,
	) -> Result<Option<PageDetail>, DbError> {
		Ok(self
			.details
			.lock()
			.unwrap()
			.values()
			.find(|d| &d.page_guid == page_guid)
			.cloned())
	}

	async fn update_detail(&self, detail: &PageDetail) -> Result<(), DbError> {
		let mut details = self.details.lock().unwrap();
		match details.get_mut(&detail.guid) {
			Some(existing) if existing.page_guid == detail.page_guid => {
				self.writes.fetch_add(1, Ordering::SeqCst);
				*existing = detail.clone();
				Ok(())
			}
			_ => Err(DbError::NotFound("page detail not found".to_string())),
		}
	}
}

#[async_trait]
impl PageTemplateStore for MockPageStore {
	async fn get_template(&self, guid: &PageTemplateGuid) -> Result<Option<PageTemplate>, DbError> {
		Ok(self.templates.lock().unwrap().get(guid).cloned())
	}
}

#[async_trait]
impl VersionStore for MockPageStore {
	async fn get_version(&self, guid: &VersionGuid) -> Result<Option<Version>, DbError> {
		Ok(self.versions.lock().unwrap().get(guid).cloned())
	}
}

/// Hands out a fixed sequence of guids, then fresh random ones.
pub struct SequenceGuidGenerator {
	queue: Mutex<VecDeque<PageGuid>>,
	pub generated: AtomicUsize,
}

impl SequenceGuidGenerator {
	pub fn new(guids: Vec<PageGuid>) -> Self {
		Self {
			queue: Mutex::new(guids.into()),
			generated: AtomicUsize::new(0),
		}
	}
}

impl GuidGenerator for SequenceGuidGenerator {
	fn generate(&self) -> PageGuid {
		self.generated.fetch_add(1, Ordering::SeqCst);
		self
			.queue
			.lock()
			.unwrap()
			.pop_front()
			.unwrap_or_else(PageGuid::generate)
	}
}
