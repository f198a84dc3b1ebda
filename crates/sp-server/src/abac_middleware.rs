// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Route-level authorization gate.
//!
//! Page routes impose no route-level restriction; their access is decided per
//! page by the permission engine. Diagnostic routes such as the health check
//! are admin-only and are wrapped in [`RequireRole::admin`].
//!
//! - A request with no identity is rejected as `unauthenticated` (401)
//! - An identity without admin privilege is rejected as `unauthorized` (401)
//! - The decision runs before the handler and is logged without credentials
//!
//! ```ignore
//! Router::new()
//!     .route("/healthcheck", get(health_check))
//!     .route_layer(RequireRole::admin());
//! ```

use axum::{
	body::Body,
	http::{Request, StatusCode},
	response::{IntoResponse, Response},
};
use pin_project_lite::pin_project;
use sp_server_auth::AuthContext;
use std::{
	future::Future,
	pin::Pin,
	task::{Context, Poll},
};
use tower::{Layer, Service};

use crate::error::ServerError;

/// Route layer that admits only the admin secret holder.
#[derive(Clone)]
pub struct RequireRole {
	_private: (),
}

impl RequireRole {
	pub fn admin() -> Self {
		Self { _private: () }
	}
}

impl<S> Layer<S> for RequireRole {
	type Service = RequireRoleService<S>;

	fn layer(&self, inner: S) -> Self::Service {
		RequireRoleService { inner }
	}
}

/// Service wrapper for [`RequireRole`] layer.
#[derive(Clone)]
pub struct RequireRoleService<S> {
	inner: S,
}

impl<S> Service<Request<Body>> for RequireRoleService<S>
where
	S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
	S::Future: Send,
{
	type Response = Response;
	type Error = S::Error;
	type Future = RequireRoleFuture<S::Future>;

	fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	fn call(&mut self, req: Request<Body>) -> Self::Future {
		let auth_ctx = req
			.extensions()
			.get::<AuthContext>()
			.cloned()
			.unwrap_or_else(AuthContext::unauthenticated);

		let Some(identity) = auth_ctx.identity else {
			tracing::debug!(
				path = %req.uri().path(),
				"Role check denied: not authenticated"
			);
			return RequireRoleFuture::Rejected {
				resp: Some(ServerError::Unauthenticated.into_response()),
			};
		};

		if !identity.is_admin {
			tracing::info!(
				user_id = ?identity.user_id,
				path = %req.uri().path(),
				"Role check denied: admin privileges required"
			);
			return RequireRoleFuture::Rejected {
				resp: Some(ServerError::Unauthorized.into_response()),
			};
		}

		tracing::debug!(
			user_id = ?identity.user_id,
			is_admin = identity.is_admin,
			"Role check passed"
		);

		RequireRoleFuture::Inner {
			fut: self.inner.call(req),
		}
	}
}

pin_project! {
	/// Future for [`RequireRoleService`].
	#[project = RequireRoleFutureProj]
	pub enum RequireRoleFuture<F> {
		Inner { #[pin] fut: F },
		Rejected { resp: Option<Response> },
	}
}

impl<F, E> Future for RequireRoleFuture<F>
where
	F: Future<Output = Result<Response, E>>,
{
	type Output = Result<Response, E>;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		match self.project() {
			RequireRoleFutureProj::Inner { fut } => fut.poll(cx),
			RequireRoleFutureProj::Rejected { resp } => Poll::Ready(Ok(resp
				.take()
				.unwrap_or_else(|| StatusCode::INTERNAL_SERVER_ERROR.into_response()))),
		}
	}
}
