// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Database bootstrap: pool re-exports and embedded migrations.

pub use sp_server_db::{
	create_pool, DbError, HealthRepository, PageDetailRepository, PageRepository,
	PageTemplateRepository, UserRepository, VersionRepository,
};

use sqlx::sqlite::SqlitePool;

const MIGRATIONS: &[(&str, &str)] = &[
	("001_users", include_str!("../migrations/001_users.sql")),
	(
		"002_page_templates_and_versions",
		include_str!("../migrations/002_page_templates_and_versions.sql"),
	),
	("003_pages", include_str!("../migrations/003_pages.sql")),
	(
		"004_page_properties",
		include_str!("../migrations/004_page_properties.sql"),
	),
];

/// Apply every migration in order. Each file is idempotent.
#[tracing::instrument(skip(pool))]
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DbError> {
	for (name, sql) in MIGRATIONS {
		tracing::debug!(migration = name, "applying migration");
		sqlx::raw_sql(sql).execute(pool).await?;
	}
	tracing::info!(count = MIGRATIONS.len(), "database migrations applied");
	Ok(())
}
