// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Routers that make each route's authentication requirement explicit.
//!
//! Routes added to a [`PublicRouter`] are served without identity resolution.
//! Routes added to an [`AuthedRouter`] run behind [`auth_layer`] and
//! [`require_auth_layer`], so their handlers only ever see an authenticated
//! identity.

use axum::{
	body::Body,
	extract::State,
	http::Request,
	middleware::{from_fn_with_state, Next},
	response::{IntoResponse, Response},
	routing::MethodRouter,
	Router,
};
use sp_server_auth::AuthContext;

use crate::{api::AppState, auth_middleware::auth_layer, error::ServerError};

/// Routes that need no identity.
#[derive(Default)]
pub struct PublicRouter {
	inner: Router<AppState>,
}

impl PublicRouter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn route(mut self, path: &str, method_router: MethodRouter<AppState>) -> Self {
		self.inner = self.inner.route(path, method_router);
		self
	}

	pub fn build(self) -> Router<AppState> {
		self.inner
	}
}

/// Routes that reject requests without a resolved identity.
#[derive(Default)]
pub struct AuthedRouter {
	inner: Router<AppState>,
}

impl AuthedRouter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn route(mut self, path: &str, method_router: MethodRouter<AppState>) -> Self {
		self.inner = self.inner.route(path, method_router);
		self
	}

	pub fn build(self, state: AppState) -> Router<AppState> {
		self
			.inner
			.layer(from_fn_with_state(state.clone(), require_auth_layer))
			.layer(from_fn_with_state(state, auth_layer))
	}
}

/// Reject the request unless [`auth_layer`] resolved an identity.
pub async fn require_auth_layer(
	State(_state): State<AppState>,
	req: Request<Body>,
	next: Next,
) -> Response {
	let authenticated = req
		.extensions()
		.get::<AuthContext>()
		.is_some_and(AuthContext::is_authenticated);

	if !authenticated {
		tracing::debug!(path = %req.uri().path(), "rejecting unauthenticated request");
		return ServerError::Unauthenticated.into_response();
	}

	next.run(req).await
}
