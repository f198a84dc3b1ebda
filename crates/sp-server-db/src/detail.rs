// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use sp_common_page::{PageDetail, PageDetailGuid, PageGuid, Partition};
use sqlx::{sqlite::SqlitePool, Row};

use crate::error::DbError;
use crate::types::{parse_id, parse_timestamp};

#[async_trait]
pub trait PageDetailStore: Send + Sync {
	async fn get_detail(&self, guid: &PageDetailGuid) -> Result<Option<PageDetail>, DbError>;
	async fn get_detail_for_page(&self, page_guid: &PageGuid)
		-> Result<Option<PageDetail>, DbError>;
	/// Overwrite title, summary and partitions in one statement.
	async fn update_detail(&self, detail: &PageDetail) -> Result<(), DbError>;
}

#[derive(Clone)]
pub struct PageDetailRepository {
	pool: SqlitePool,
}

impl PageDetailRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self), fields(detail_guid = %guid))]
	pub async fn get_detail(&self, guid: &PageDetailGuid) -> Result<Option<PageDetail>, DbError> {
		let row = sqlx::query(
			r#"
			SELECT guid, page_guid, title, summary, partitions, updated_at
			FROM page_details
			WHERE guid = ?
			"#,
		)
		.bind(guid.to_string())
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_detail(&r)).transpose()
	}

	#[tracing::instrument(skip(self), fields(page_guid = %page_guid))]
	pub async fn get_detail_for_page(
		&self,
		page_guid: &PageGuid,
	) -> Result<Option<PageDetail>, DbError> {
		let row = sqlx::query(
			r#"
			SELECT guid, page_guid, title, summary, partitions, updated_at
			FROM page_details
			WHERE page_guid = ?
			"#,
		)
		.bind(page_guid.to_string())
		.fetch_optional(&self.pool)
		.await?;

		row.map(|r| row_to_detail(&r)).transpose()
	}

	#[tracing::instrument(
		skip(self, detail),
		fields(detail_guid = %detail.guid, partitions = detail.partitions.len())
	)]
	pub async fn update_detail(&self, detail: &PageDetail) -> Result<(), DbError> {
		let partitions = serde_json::to_string(&detail.partitions)?;

		let result = sqlx::query(
			r#"
			UPDATE page_details
			SET title = ?, summary = ?, partitions = ?, updated_at = ?
			WHERE guid = ? AND page_guid = ?
			"#,
		)
		.bind(&detail.title)
		.bind(&detail.summary)
		.bind(&partitions)
		.bind(detail.updated_at.to_rfc3339())
		.bind(detail.guid.to_string())
		.bind(detail.page_guid.to_string())
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound("Page detail not found".to_string()));
		}

		Ok(())
	}
}

fn row_to_detail(row: &sqlx::sqlite::SqliteRow) -> Result<PageDetail, DbError> {
	let guid: String = row.get("guid");
	let page_guid: String = row.get("page_guid");
	let partitions: String = row.get("partitions");
	let updated_at: String = row.get("updated_at");

	let partitions: Vec<Partition> = serde_json::from_str(&partitions)?;

	Ok(PageDetail {
		guid: parse_id(&guid)?,
		page_guid: parse_id(&page_guid)?,
		title: row.get("title"),
		summary: row.get("summary"),
		partitions,
		updated_at: parse_timestamp(&updated_at)?,
	})
}

#[async_trait]
impl PageDetailStore for PageDetailRepository {
	async fn get_detail(&self, guid: &PageDetailGuid) -> Result<Option<PageDetail>, DbError> {
		PageDetailRepository::get_detail(self, guid).await
	}

	async fn get_detail_for_page(
		&self,
		page_guid: &PageGuid,
	) -> Result<Option<PageDetail>, DbError> {
		PageDetailRepository::get_detail_for_page(self, page_guid).await
	}

	async fn update_detail(&self, detail: &PageDetail) -> Result<(), DbError> {
		PageDetailRepository::update_detail(self, detail).await
	}
}
