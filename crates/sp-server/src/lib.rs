// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Collaborative page server.
//!
//! Every request passes the identity middleware ([`auth_middleware`]), the
//! route gates ([`typed_router`], [`abac_middleware`]) and then a page
//! service in [`services`]. Failures are classified by [`ServerError`].

pub mod abac_middleware;
pub mod api;
pub mod api_docs;
pub mod auth_middleware;
pub mod db;
pub mod error;
pub mod pagination;
pub mod routes;
pub mod services;
pub mod typed_router;
pub mod version;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use error::ServerError;
pub use sp_server_config::ServerConfig;
pub use typed_router::{AuthedRouter, PublicRouter};
