// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections. Each has a resolved form and a partial `*Layer`
//! form that sources produce and merge.

mod auth;
mod cors;
mod database;
mod http;
mod logging;
mod pages;
mod paths;

pub use auth::{AuthConfig, AuthConfigLayer, DEFAULT_ADMIN_SECRET, LOCAL_DATACENTER};
pub use cors::{CorsConfig, CorsConfigLayer};
pub use database::{DatabaseConfig, DatabaseConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
pub use pages::{PagesConfig, PagesConfigLayer, MAX_BATCH_SIZE};
pub use paths::{PathsConfig, PathsConfigLayer};
