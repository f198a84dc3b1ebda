// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use crate::error::DbError;

/// Reports whether the backing store is usable.
///
/// `Ok(false)` means the check ran and the store is unhealthy; `Err` means the
/// check itself could not be carried out.
#[async_trait]
pub trait HealthStore: Send + Sync {
	async fn is_healthy(&self) -> Result<bool, DbError>;
}

#[derive(Clone)]
pub struct HealthRepository {
	pool: SqlitePool,
}

impl HealthRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self))]
	pub async fn is_healthy(&self) -> Result<bool, DbError> {
		if self.pool.is_closed() {
			tracing::warn!("database pool is closed");
			return Ok(false);
		}

		match sqlx::query_scalar::<_, i64>("SELECT 1")
			.fetch_one(&self.pool)
			.await
		{
			Ok(1) => Ok(true),
			Ok(other) => Err(DbError::Internal(format!(
				"health check returned unexpected value {other}"
			))),
			Err(e) => {
				tracing::warn!(error = %e, "database health check failed");
				Ok(false)
			}
		}
	}
}

#[async_trait]
impl HealthStore for HealthRepository {
	async fn is_healthy(&self) -> Result<bool, DbError> {
		HealthRepository::is_healthy(self).await
	}
}
