// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use chrono::Utc;
use sp_common_page::{Version, VersionGuid};
use sqlx::{sqlite::SqlitePool, Row};

use crate::error::DbError;
use crate::types::parse_id;

#[async_trait]
pub trait VersionStore: Send + Sync {
	async fn get_version(&self, guid: &VersionGuid) -> Result<Option<Version>, DbError>;
}

#[derive(Clone)]
pub struct VersionRepository {
	pool: SqlitePool,
}

impl VersionRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self, version), fields(version_guid = %version.guid))]
	pub async fn create_version(&self, version: &Version) -> Result<(), DbError> {
		sqlx::query("INSERT INTO versions (guid, name, created_at) VALUES (?, ?, ?)")
			.bind(version.guid.to_string())
			.bind(&version.name)
			.bind(Utc::now().to_rfc3339())
			.execute(&self.pool)
			.await
			.map_err(|e| DbError::from_insert(e, "Version"))?;

		Ok(())
	}

	#[tracing::instrument(skip(self), fields(version_guid = %guid))]
	pub async fn get_version(&self, guid: &VersionGuid) -> Result<Option<Version>, DbError> {
		let row = sqlx::query("SELECT guid, name FROM versions WHERE guid = ?")
			.bind(guid.to_string())
			.fetch_optional(&self.pool)
			.await?;

		row
			.map(|r| {
				let guid: String = r.get("guid");
				Ok(Version {
					guid: parse_id(&guid)?,
					name: r.get("name"),
				})
			})
			.transpose()
	}
}

#[async_trait]
impl VersionStore for VersionRepository {
	async fn get_version(&self, guid: &VersionGuid) -> Result<Option<Version>, DbError> {
		VersionRepository::get_version(self, guid).await
	}
}
