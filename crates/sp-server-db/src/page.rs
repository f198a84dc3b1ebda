// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use sp_common_page::{Page, PageAccess, PageDetail, PageGuid, PageProperty, PermissionType, UserId};
use sqlx::{sqlite::SqlitePool, QueryBuilder, Row, Sqlite};

use crate::error::DbError;
use crate::types::{parse_id, parse_opt_id, parse_timestamp};

/// Which pages a listing may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVisibility {
	/// Every page (admin secret holder).
	All,
	/// Pages the user owns plus pages whose permission type lets non-owners read.
	ReadableBy(UserId),
}

#[async_trait]
pub trait PageStore: Send + Sync {
	/// Uniqueness oracle used before insert. The primary key stays authoritative.
	async fn is_guid_taken(&self, guid: &PageGuid) -> Result<bool, DbError>;
	/// Insert a page together with its detail. `Conflict` on a duplicate guid.
	async fn create_page(&self, page: &Page, detail: &PageDetail) -> Result<(), DbError>;
	async fn update_page(&self, page: &Page) -> Result<(), DbError>;
	/// Remove a page with its detail and properties.
	async fn delete_page(&self, guid: &PageGuid) -> Result<(), DbError>;
	async fn get_page(&self, guid: &PageGuid) -> Result<Option<Page>, DbError>;
	async fn get_page_access(&self, guid: &PageGuid) -> Result<Option<PageAccess>, DbError>;
	/// Visible pages ordered by guid, strictly after `after`.
	async fn list_pages(
		&self,
		visibility: PageVisibility,
		after: Option<PageGuid>,
		limit: u32,
	) -> Result<Vec<Page>, DbError>;
	async fn count_pages(&self, visibility: PageVisibility) -> Result<u64, DbError>;
	/// Properties in stored order. Empty for a page that has none.
	async fn get_page_properties(&self, guid: &PageGuid) -> Result<Vec<PageProperty>, DbError>;
	/// Swap the whole property set atomically. `NotFound` if the page is gone.
	async fn replace_page_properties(
		&self,
		guid: &PageGuid,
		properties: &[PageProperty],
	) -> Result<(), DbError>;
}

#[derive(Clone)]
pub struct PageRepository {
	pool: SqlitePool,
}

const PAGE_COLUMNS: &str = "guid, title, summary, owner_id, permission_type, template_guid, \
	version_guid, created_at, updated_at";

impl PageRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	pub fn pool(&self) -> &SqlitePool {
		&self.pool
	}

	#[tracing::instrument(skip(self), fields(page_guid = %guid))]
	pub async fn is_guid_taken(&self, guid: &PageGuid) -> Result<bool, DbError> {
		let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pages WHERE guid = ?")
			.bind(guid.to_string())
			.fetch_one(&self.pool)
			.await?;

		Ok(count > 0)
	}

	#[tracing::instrument(skip(self, page, detail), fields(page_guid = %page.guid, owner_id = %page.owner_id))]
	pub async fn create_page(&self, page: &Page, detail: &PageDetail) -> Result<(), DbError> {
		let partitions = serde_json::to_string(&detail.partitions)?;
		let mut tx = self.pool.begin().await?;

		sqlx::query(
			r#"
			INSERT INTO pages (guid, title, summary, owner_id, permission_type, template_guid,
				version_guid, created_at, updated_at)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(page.guid.to_string())
		.bind(&page.title)
		.bind(&page.summary)
		.bind(page.owner_id.to_string())
		.bind(page.permission_type.as_str())
		.bind(page.template_guid.map(|g| g.to_string()))
		.bind(page.version_guid.map(|g| g.to_string()))
		.bind(page.created_at.to_rfc3339())
		.bind(page.updated_at.to_rfc3339())
		.execute(&mut *tx)
		.await
		.map_err(|e| DbError::from_insert(e, "Page"))?;

		sqlx::query(
			r#"
			INSERT INTO page_details (guid, page_guid, title, summary, partitions, updated_at)
			VALUES (?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(detail.guid.to_string())
		.bind(detail.page_guid.to_string())
		.bind(&detail.title)
		.bind(&detail.summary)
		.bind(&partitions)
		.bind(detail.updated_at.to_rfc3339())
		.execute(&mut *tx)
		.await
		.map_err(|e| DbError::from_insert(e, "Page detail"))?;

		tx.commit().await?;
		tracing::debug!("page created");
		Ok(())
	}

	/// Overwrites the mutable columns. `guid`, `owner_id` and `created_at` are
	/// never written.
	#[tracing::instrument(skip(self, page), fields(page_guid = %page.guid))]
	pub async fn update_page(&self, page: &Page) -> Result<(), DbError> {
		let result = sqlx::query(
			r#"
			UPDATE pages
			SET title = ?, summary = ?, permission_type = ?, template_guid = ?, version_guid = ?,
				updated_at = ?
			WHERE guid = ?
			"#,
		)
		.bind(&page.title)
		.bind(&page.summary)
		.bind(page.permission_type.as_str())
		.bind(page.template_guid.map(|g| g.to_string()))
		.bind(page.version_guid.map(|g| g.to_string()))
		.bind(page.updated_at.to_rfc3339())
		.bind(page.guid.to_string())
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound("Page not found".to_string()));
		}

		Ok(())
	}

	#[tracing::instrument(skip(self), fields(page_guid = %guid))]
	pub async fn delete_page(&self, guid: &PageGuid) -> Result<(), DbError> {
		let mut tx = self.pool.begin().await?;

		sqlx::query("DELETE FROM page_details WHERE page_guid = ?")
			.bind(guid.to_string())
			.execute(&mut *tx)
			.await?;

		sqlx::query("DELETE FROM page_properties WHERE page_guid = ?")
			.bind(guid.to_string())
			.execute(&mut *tx)
			.await?;

		let result = sqlx::query("DELETE FROM pages WHERE guid = ?")
			.bind(guid.to_string())
			.execute(&mut *tx)
			.await?;

		if result.rows_affected() == 0 {
			tx.rollback().await?;
			return Err(DbError::NotFound("Page not found".to_string()));
		}

		tx.commit().await?;
		Ok(())
	}

	#[tracing::instrument(skip(self), fields(page_guid = %guid))]
	pub async fn get_page(&self, guid: &PageGuid) -> Result<Option<Page>, DbError> {
		let row = sqlx::query(&format!("SELECT {PAGE_COLUMNS} FROM pages WHERE guid = ?"))
			.bind(guid.to_string())
			.fetch_optional(&self.pool)
			.await?;

		row.map(|r| row_to_page(&r)).transpose()
	}

	#[tracing::instrument(skip(self), fields(page_guid = %guid))]
	pub async fn get_page_access(&self, guid: &PageGuid) -> Result<Option<PageAccess>, DbError> {
		let row = sqlx::query("SELECT owner_id, permission_type FROM pages WHERE guid = ?")
			.bind(guid.to_string())
			.fetch_optional(&self.pool)
			.await?;

		row
			.map(|r| {
				let owner_id: String = r.get("owner_id");
				let permission_type: String = r.get("permission_type");
				Ok(PageAccess {
					owner_id: parse_id(&owner_id)?,
					permission_type: parse_permission_type(&permission_type)?,
				})
			})
			.transpose()
	}

	#[tracing::instrument(skip(self))]
	pub async fn list_pages(
		&self,
		visibility: PageVisibility,
		after: Option<PageGuid>,
		limit: u32,
	) -> Result<Vec<Page>, DbError> {
		let mut qb: QueryBuilder<Sqlite> =
			QueryBuilder::new(format!("SELECT {PAGE_COLUMNS} FROM pages WHERE 1 = 1"));
		push_visibility(&mut qb, visibility);
		if let Some(after) = after {
			qb.push(" AND guid > ").push_bind(after.to_string());
		}
		qb.push(" ORDER BY guid ASC LIMIT ").push_bind(i64::from(limit));

		let rows = qb.build().fetch_all(&self.pool).await?;
		rows.iter().map(row_to_page).collect()
	}

	#[tracing::instrument(skip(self))]
	pub async fn count_pages(&self, visibility: PageVisibility) -> Result<u64, DbError> {
		let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(*) FROM pages WHERE 1 = 1");
		push_visibility(&mut qb, visibility);

		let count: i64 = qb.build_query_scalar::<i64>().fetch_one(&self.pool).await?;
		u64::try_from(count).map_err(|e| DbError::Internal(e.to_string()))
	}

	#[tracing::instrument(skip(self), fields(page_guid = %guid))]
	pub async fn get_page_properties(&self, guid: &PageGuid) -> Result<Vec<PageProperty>, DbError> {
		let rows = sqlx::query(
			"SELECT prop_key, prop_value FROM page_properties WHERE page_guid = ? ORDER BY position ASC",
		)
		.bind(guid.to_string())
		.fetch_all(&self.pool)
		.await?;

		Ok(rows
			.iter()
			.map(|row| PageProperty {
				key: row.get("prop_key"),
				value: row.get("prop_value"),
			})
			.collect())
	}

	#[tracing::instrument(skip(self, properties), fields(page_guid = %guid, count = properties.len()))]
	pub async fn replace_page_properties(
		&self,
		guid: &PageGuid,
		properties: &[PageProperty],
	) -> Result<(), DbError> {
		let mut tx = self.pool.begin().await?;

		let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pages WHERE guid = ?")
			.bind(guid.to_string())
			.fetch_one(&mut *tx)
			.await?;
		if exists == 0 {
			tx.rollback().await?;
			return Err(DbError::NotFound("Page not found".to_string()));
		}

		sqlx::query("DELETE FROM page_properties WHERE page_guid = ?")
			.bind(guid.to_string())
			.execute(&mut *tx)
			.await?;

		for (position, property) in properties.iter().enumerate() {
			let position =
				i64::try_from(position).map_err(|e| DbError::Internal(e.to_string()))?;
			sqlx::query(
				r#"
				INSERT INTO page_properties (page_guid, position, prop_key, prop_value)
				VALUES (?, ?, ?, ?)
				"#,
			)
			.bind(guid.to_string())
			.bind(position)
			.bind(&property.key)
			.bind(&property.value)
			.execute(&mut *tx)
			.await
			.map_err(|e| DbError::from_insert(e, "Page property"))?;
		}

		tx.commit().await?;
		tracing::debug!("page properties replaced");
		Ok(())
	}
}

/// Mirrors the read rule of the permission policy: owners see their own
/// pages, others see pages whose type grants non-owner read.
fn push_visibility(qb: &mut QueryBuilder<'_, Sqlite>, visibility: PageVisibility) {
	let PageVisibility::ReadableBy(user_id) = visibility else {
		return;
	};

	qb.push(" AND (owner_id = ").push_bind(user_id.to_string());
	let readable: Vec<&'static str> = PermissionType::ALL
		.iter()
		.filter(|p| p.grants_non_owner_read())
		.map(|p| p.as_str())
		.collect();
	if !readable.is_empty() {
		qb.push(" OR permission_type IN (");
		let mut separated = qb.separated(", ");
		for permission_type in readable {
			separated.push_bind(permission_type);
		}
		separated.push_unseparated(")");
	}
	qb.push(")");
}

fn parse_permission_type(value: &str) -> Result<PermissionType, DbError> {
	value
		.parse()
		.map_err(|e: sp_common_page::PermissionTypeParseError| DbError::Internal(e.to_string()))
}

fn row_to_page(row: &sqlx::sqlite::SqliteRow) -> Result<Page, DbError> {
	let guid: String = row.get("guid");
	let owner_id: String = row.get("owner_id");
	let permission_type: String = row.get("permission_type");
	let created_at: String = row.get("created_at");
	let updated_at: String = row.get("updated_at");

	Ok(Page {
		guid: parse_id(&guid)?,
		title: row.get("title"),
		summary: row.get("summary"),
		owner_id: parse_id(&owner_id)?,
		permission_type: parse_permission_type(&permission_type)?,
		template_guid: parse_opt_id(row.get("template_guid"))?,
		version_guid: parse_opt_id(row.get("version_guid"))?,
		created_at: parse_timestamp(&created_at)?,
		updated_at: parse_timestamp(&updated_at)?,
	})
}

#[async_trait]
impl PageStore for PageRepository {
	async fn is_guid_taken(&self, guid: &PageGuid) -> Result<bool, DbError> {
		PageRepository::is_guid_taken(self, guid).await
	}

	async fn create_page(&self, page: &Page, detail: &PageDetail) -> Result<(), DbError> {
		PageRepository::create_page(self, page, detail).await
	}

	async fn update_page(&self, page: &Page) -> Result<(), DbError> {
		PageRepository::update_page(self, page).await
	}

	async fn delete_page(&self, guid: &PageGuid) -> Result<(), DbError> {
		PageRepository::delete_page(self, guid).await
	}

	async fn get_page(&self, guid: &PageGuid) -> Result<Option<Page>, DbError> {
		PageRepository::get_page(self, guid).await
	}

	async fn get_page_access(&self, guid: &PageGuid) -> Result<Option<PageAccess>, DbError> {
		PageRepository::get_page_access(self, guid).await
	}

	async fn list_pages(
		&self,
		visibility: PageVisibility,
		after: Option<PageGuid>,
		limit: u32,
	) -> Result<Vec<Page>, DbError> {
		PageRepository::list_pages(self, visibility, after, limit).await
	}

	async fn count_pages(&self, visibility: PageVisibility) -> Result<u64, DbError> {
		PageRepository::count_pages(self, visibility).await
	}

	async fn get_page_properties(&self, guid: &PageGuid) -> Result<Vec<PageProperty>, DbError> {
		PageRepository::get_page_properties(self, guid).await
	}

	async fn replace_page_properties(
		&self,
		guid: &PageGuid,
		properties: &[PageProperty],
	) -> Result<(), DbError> {
		PageRepository::replace_page_properties(self, guid, properties).await
	}
}
