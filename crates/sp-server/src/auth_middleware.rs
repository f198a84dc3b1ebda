// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Identity resolution middleware and extractors.
//!
//! [`auth_layer`] runs once per request, resolves the caller from the
//! credential headers and stores an [`AuthContext`] in the request
//! extensions. Nothing downstream reads the credential headers again.
//!
//! Resolution order:
//! 1. `X-ADMIN-AUTH-SECRET` matching the configured secret → admin identity
//! 2. `X-USER-ID` naming a user in the directory → user identity
//! 3. otherwise → not authenticated
//!
//! A malformed or unknown user id and a failed directory lookup all resolve
//! to "not authenticated"; lookup failures are logged.

use axum::{
	body::Body,
	extract::{FromRequestParts, State},
	http::{request::Parts, HeaderMap, Request},
	middleware::Next,
	response::Response,
};
use sp_common_secret::SecretString;
use sp_server_auth::{
	extract_admin_secret, extract_user_id, verify_admin_secret, AuthContext, Identity,
};
use sp_server_db::UserStore;

use crate::{api::AppState, error::ServerError};

/// Resolve the caller's identity from request headers.
pub async fn resolve_identity(
	admin_secret: &SecretString,
	users: &dyn UserStore,
	headers: &HeaderMap,
) -> Option<Identity> {
	if let Some(presented) = extract_admin_secret(headers) {
		if verify_admin_secret(admin_secret, &presented) {
			return Some(Identity::admin());
		}
		tracing::debug!("admin secret presented but did not match");
	}

	let user_id = match extract_user_id(headers) {
		Ok(Some(user_id)) => user_id,
		Ok(None) => return None,
		Err(e) => {
			tracing::debug!(error = %e, "ignoring malformed user id header");
			return None;
		}
	};

	match users.get_user(&user_id).await {
		Ok(Some(user)) => Some(Identity::user(user.id)),
		Ok(None) => {
			tracing::debug!(user_id = %user_id, "user id header names an unknown user");
			None
		}
		Err(e) => {
			tracing::error!(user_id = %user_id, error = %e, "user directory lookup failed");
			None
		}
	}
}

/// Middleware that attaches an [`AuthContext`] to every request.
///
/// Records `auth_method` and `user_id` on the enclosing request span.
pub async fn auth_layer(
	State(state): State<AppState>,
	mut req: Request<Body>,
	next: Next,
) -> Response {
	let identity = resolve_identity(
		&state.admin_secret,
		state.user_store.as_ref(),
		req.headers(),
	)
	.await;
	let auth_ctx = match identity {
		Some(identity) => AuthContext::authenticated(identity),
		None => AuthContext::unauthenticated(),
	};

	let span = tracing::Span::current();
	span.record("auth_method", auth_ctx.method().as_str());
	if let Some(user_id) = identity.and_then(|i| i.user_id) {
		span.record("user_id", tracing::field::display(user_id));
	}

	req.extensions_mut().insert(auth_ctx);
	next.run(req).await
}

/// Extractor for handlers that need a resolved identity.
///
/// Rejects with `unauthenticated` when the request carries none.
pub struct RequireIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequireIdentity
where
	S: Send + Sync,
{
	type Rejection = ServerError;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		parts
			.extensions
			.get::<AuthContext>()
			.and_then(|ctx| ctx.identity)
			.map(RequireIdentity)
			.ok_or(ServerError::Unauthenticated)
	}
}
