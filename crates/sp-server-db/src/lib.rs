// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SQLite persistence for sp-server.
//!
//! Every collaborator the page service talks to is a capability trait
//! ([`PageStore`], [`PageDetailStore`], [`PageTemplateStore`],
//! [`VersionStore`], [`UserStore`], [`HealthStore`]) with one sqlx-backed
//! repository implementing it. Services hold `Arc<dyn ...Store>` so tests can
//! swap in fakes.

pub mod detail;
pub mod error;
pub mod health;
pub mod page;
pub mod pool;
pub mod template;
pub mod testing;
mod types;
pub mod user;
pub mod version;

pub use detail::{PageDetailRepository, PageDetailStore};
pub use error::{DbError, Result};
pub use health::{HealthRepository, HealthStore};
pub use page::{PageRepository, PageStore, PageVisibility};
pub use pool::create_pool;
pub use template::{PageTemplateRepository, PageTemplateStore};
pub use user::{UserRepository, UserStore};
pub use version::{VersionRepository, VersionStore};

pub use sqlx::sqlite::SqlitePool;
