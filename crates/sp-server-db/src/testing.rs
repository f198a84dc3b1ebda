// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory pools for repository tests. Tables come from the server's own
//! migration files so tests and production share one schema.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// A single-connection pool: every `:memory:` connection is its own database.
pub async fn create_test_pool() -> SqlitePool {
	let options = SqliteConnectOptions::from_str(":memory:")
		.unwrap()
		.create_if_missing(true);

	SqlitePoolOptions::new()
		.max_connections(1)
		.connect_with(options)
		.await
		.expect("Failed to create test pool")
}

pub async fn create_users_table(pool: &SqlitePool) {
	sqlx::raw_sql(include_str!("../../sp-server/migrations/001_users.sql"))
		.execute(pool)
		.await
		.unwrap();
}

pub async fn create_reference_tables(pool: &SqlitePool) {
	sqlx::raw_sql(include_str!(
		"../../sp-server/migrations/002_page_templates_and_versions.sql"
	))
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_page_tables(pool: &SqlitePool) {
	sqlx::raw_sql(include_str!("../../sp-server/migrations/003_pages.sql"))
		.execute(pool)
		.await
		.unwrap();
	sqlx::raw_sql(include_str!(
		"../../sp-server/migrations/004_page_properties.sql"
	))
	.execute(pool)
	.await
	.unwrap();
}

pub async fn create_page_test_pool() -> SqlitePool {
	let pool = create_test_pool().await;
	create_page_tables(&pool).await;
	pool
}

pub async fn create_full_test_pool() -> SqlitePool {
	let pool = create_test_pool().await;
	create_users_table(&pool).await;
	create_reference_tables(&pool).await;
	create_page_tables(&pool).await;
	pool
}
