// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use chrono::Utc;
use sp_common_page::{User, UserId};
use sqlx::{sqlite::SqlitePool, Row};

use crate::error::DbError;
use crate::types::parse_id;

/// The user directory consulted by identity resolution.
#[async_trait]
pub trait UserStore: Send + Sync {
	async fn get_user(&self, id: &UserId) -> Result<Option<User>, DbError>;
}

#[derive(Clone)]
pub struct UserRepository {
	pool: SqlitePool,
}

impl UserRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self, user), fields(user_id = %user.id))]
	pub async fn create_user(&self, user: &User) -> Result<(), DbError> {
		sqlx::query("INSERT INTO users (id, display_name, created_at) VALUES (?, ?, ?)")
			.bind(user.id.to_string())
			.bind(&user.display_name)
			.bind(Utc::now().to_rfc3339())
			.execute(&self.pool)
			.await
			.map_err(|e| DbError::from_insert(e, "User"))?;

		Ok(())
	}

	#[tracing::instrument(skip(self), fields(user_id = %id))]
	pub async fn get_user(&self, id: &UserId) -> Result<Option<User>, DbError> {
		let row = sqlx::query("SELECT id, display_name FROM users WHERE id = ?")
			.bind(id.to_string())
			.fetch_optional(&self.pool)
			.await?;

		row
			.map(|r| {
				let id: String = r.get("id");
				Ok(User {
					id: parse_id(&id)?,
					display_name: r.get("display_name"),
				})
			})
			.transpose()
	}
}

#[async_trait]
impl UserStore for UserRepository {
	async fn get_user(&self, id: &UserId) -> Result<Option<User>, DbError> {
		UserRepository::get_user(self, id).await
	}
}
