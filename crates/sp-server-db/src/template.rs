// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use chrono::Utc;
use sp_common_page::{PageTemplate, PageTemplateGuid};
use sqlx::{sqlite::SqlitePool, Row};

use crate::error::DbError;
use crate::types::parse_id;

#[async_trait]
pub trait PageTemplateStore: Send + Sync {
	async fn get_template(&self, guid: &PageTemplateGuid) -> Result<Option<PageTemplate>, DbError>;
}

#[derive(Clone)]
pub struct PageTemplateRepository {
	pool: SqlitePool,
}

impl PageTemplateRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self, template), fields(template_guid = %template.guid))]
	pub async fn create_template(&self, template: &PageTemplate) -> Result<(), DbError> {
		sqlx::query("INSERT INTO page_templates (guid, name, created_at) VALUES (?, ?, ?)")
			.bind(template.guid.to_string())
			.bind(&template.name)
			.bind(Utc::now().to_rfc3339())
			.execute(&self.pool)
			.await
			.map_err(|e| DbError::from_insert(e, "Page template"))?;

		Ok(())
	}

	#[tracing::instrument(skip(self), fields(template_guid = %guid))]
	pub async fn get_template(
		&self,
		guid: &PageTemplateGuid,
	) -> Result<Option<PageTemplate>, DbError> {
		let row = sqlx::query("SELECT guid, name FROM page_templates WHERE guid = ?")
			.bind(guid.to_string())
			.fetch_optional(&self.pool)
			.await?;

		row
			.map(|r| {
				let guid: String = r.get("guid");
				Ok(PageTemplate {
					guid: parse_id(&guid)?,
					name: r.get("name"),
				})
			})
			.transpose()
	}
}

#[async_trait]
impl PageTemplateStore for PageTemplateRepository {
	async fn get_template(&self, guid: &PageTemplateGuid) -> Result<Option<PageTemplate>, DbError> {
		PageTemplateRepository::get_template(self, guid).await
	}
}
