// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health check HTTP handler.

use axum::{extract::State, Json};
use sp_server_api::{ErrorResponse, HealthResponse};

use crate::{api::AppState, error::ServerError, services::check_health};

/// GET /healthcheck - Admin-only store health report.
#[utoipa::path(
    get,
    path = "/healthcheck",
    responses(
        (status = 200, description = "Check ran; status is ok or error", body = HealthResponse),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorResponse),
        (status = 500, description = "Check could not run", body = ErrorResponse)
    ),
    tag = "health"
)]
pub async fn health_check(
	State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ServerError> {
	let report = check_health(state.health_store.as_ref()).await?;
	Ok(Json(report))
}
