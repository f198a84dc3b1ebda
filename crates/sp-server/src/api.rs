// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and route table.

use std::sync::Arc;
use std::time::Duration;

use axum::{
	body::Body,
	http::{header, HeaderName, HeaderValue, Method, Request, StatusCode},
	routing::{get, patch, post, put},
	Router,
};
use sp_common_secret::SecretString;
use sp_server_config::ServerConfig;
use sp_server_db::{
	HealthRepository, HealthStore, PageDetailRepository, PageRepository, PageTemplateRepository,
	UserRepository, UserStore, VersionRepository,
};
use sqlx::SqlitePool;
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	services::ServeDir,
	timeout::TimeoutLayer,
	trace::TraceLayer,
};

use crate::{
	abac_middleware::RequireRole,
	routes,
	services::{PageService, PageSettings, PageStores, StorePermissionEngine},
	typed_router::{AuthedRouter, PublicRouter},
};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
	pub admin_secret: Arc<SecretString>,
	pub user_store: Arc<dyn UserStore>,
	pub health_store: Arc<dyn HealthStore>,
	pub page_service: Arc<PageService>,
}

/// Wire the sqlx repositories into the services.
pub fn create_app_state(pool: SqlitePool, config: &ServerConfig) -> AppState {
	let pages = Arc::new(PageRepository::new(pool.clone()));
	let stores = PageStores {
		pages: pages.clone(),
		details: Arc::new(PageDetailRepository::new(pool.clone())),
		templates: Arc::new(PageTemplateRepository::new(pool.clone())),
		versions: Arc::new(VersionRepository::new(pool.clone())),
	};
	let permissions = Arc::new(StorePermissionEngine::new(pages));
	let settings = PageSettings {
		batch_size: config.pages.batch_size,
		guid_attempts: config.pages.guid_attempts,
	};

	AppState {
		user_store: Arc::new(UserRepository::new(pool.clone())),
		health_store: Arc::new(HealthRepository::new(pool.clone())),
		page_service: Arc::new(PageService::new(stores, permissions, settings)),
		admin_secret: Arc::new(config.auth.admin_secret.clone()),
	}
}

fn admin_routes(state: AppState) -> Router<AppState> {
	use crate::{auth_middleware::auth_layer, typed_router::require_auth_layer};
	use axum::middleware::from_fn_with_state;

	Router::new()
		.route("/healthcheck", get(routes::health::health_check))
		.route_layer(RequireRole::admin())
		.layer(from_fn_with_state(state.clone(), require_auth_layer))
		.layer(from_fn_with_state(state, auth_layer))
}

fn api_routes(state: AppState) -> Router<AppState> {
	let public = PublicRouter::new()
		.route("/openapi.json", get(routes::docs::openapi_json))
		.build();

	let authed = AuthedRouter::new()
		.route(
			"/pages",
			post(routes::pages::create_page).get(routes::pages::list_pages),
		)
		.route(
			"/pages/{page_id}",
			get(routes::pages::get_page)
				.patch(routes::pages::update_page)
				.delete(routes::pages::delete_page),
		)
		.route("/pages/{page_id}/full", get(routes::pages::get_entire_page))
		.route(
			"/pages/{page_id}/properties",
			get(routes::properties::get_page_properties)
				.put(routes::properties::replace_page_properties),
		)
		.route(
			"/pages/{page_id}/details/{detail_id}",
			patch(routes::details::update_page_detail),
		)
		.build(state.clone());

	Router::new()
		.merge(public)
		.merge(authed)
		.merge(admin_routes(state))
}

/// Create the router: every API route under `/{api_path}`, plus static files
/// when a static directory is configured.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
	let api = api_routes(state.clone());
	let api_path = config.http.api_path.trim_matches('/');

	let mut router = if api_path.is_empty() {
		Router::new().merge(api)
	} else {
		Router::new().nest(&format!("/{api_path}"), api)
	}
	.with_state(state);

	if let Some(static_dir) = &config.paths.static_dir {
		tracing::info!(static_dir = %static_dir.display(), "serving static files");
		router = router.fallback_service(ServeDir::new(static_dir));
	}

	router
}

/// Outer HTTP layers: request tracing, the per-request timeout and, in the
/// local datacenter, CORS.
pub fn apply_http_layers(router: Router, config: &ServerConfig) -> Router {
	let mut router = router
		.layer(TimeoutLayer::with_status_code(
			StatusCode::REQUEST_TIMEOUT,
			Duration::from_secs(config.http.request_timeout_secs),
		))
		.layer(TraceLayer::new_for_http().make_span_with(make_request_span));

	if config.is_local() {
		router = router.layer(cors_layer(&config.cors.allowed_origins));
	}

	router
}

/// Request span with the fields the identity middleware fills in.
fn make_request_span(req: &Request<Body>) -> tracing::Span {
	tracing::info_span!(
		"request",
		method = %req.method(),
		uri = %req.uri(),
		auth_method = tracing::field::Empty,
		user_id = tracing::field::Empty,
	)
}

/// Configured origins that are valid header values; the rest are logged and skipped.
fn parse_origins(allowed_origins: &[String]) -> Vec<HeaderValue> {
	allowed_origins
		.iter()
		.filter_map(|origin| match HeaderValue::from_str(origin) {
			Ok(value) => Some(value),
			Err(e) => {
				tracing::warn!(origin = %origin, error = %e, "ignoring invalid CORS origin");
				None
			}
		})
		.collect()
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
	CorsLayer::new()
		.allow_origin(AllowOrigin::list(parse_origins(allowed_origins)))
		.allow_methods([
			Method::GET,
			Method::POST,
			Method::DELETE,
			Method::PUT,
			Method::OPTIONS,
			Method::PATCH,
		])
		.allow_headers([
			HeaderName::from_static(sp_server_auth::ADMIN_SECRET_HEADER),
			HeaderName::from_static(sp_server_auth::USER_ID_HEADER),
			header::CONTENT_TYPE,
		])
}
