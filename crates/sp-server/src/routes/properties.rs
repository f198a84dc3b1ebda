// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Page property handlers.

use axum::{
	extract::{rejection::JsonRejection, Path, State},
	http::StatusCode,
	Json,
};
use sp_common_page::PageGuid;
use sp_server_api::{ErrorResponse, PagePropertiesResponse, ReplacePagePropertiesRequest};

use crate::{api::AppState, auth_middleware::RequireIdentity, error::ServerError};

/// GET /pages/{page_id}/properties - The page's properties in stored order.
#[utoipa::path(
    get,
    path = "/pages/{page_id}/properties",
    params(("page_id" = String, Path, description = "Page id")),
    responses(
        (status = 200, description = "Current property set", body = PagePropertiesResponse),
        (status = 400, description = "Malformed page id", body = ErrorResponse),
        (status = 401, description = "Not authenticated or not allowed to read", body = ErrorResponse)
    ),
    tag = "pages"
)]
pub async fn get_page_properties(
	RequireIdentity(identity): RequireIdentity,
	State(state): State<AppState>,
	Path(page_id): Path<String>,
) -> Result<Json<PagePropertiesResponse>, ServerError> {
	let guid = PageGuid::parse(&page_id)?;
	let properties = state
		.page_service
		.get_page_properties(&identity, &guid)
		.await?;
	Ok(Json(properties))
}

/// PUT /pages/{page_id}/properties - Replace the whole property set.
#[utoipa::path(
    put,
    path = "/pages/{page_id}/properties",
    params(("page_id" = String, Path, description = "Page id")),
    request_body = ReplacePagePropertiesRequest,
    responses(
        (status = 200, description = "Properties replaced"),
        (status = 400, description = "Invalid property set", body = ErrorResponse),
        (status = 401, description = "Not authenticated or not allowed to edit", body = ErrorResponse)
    ),
    tag = "pages"
)]
pub async fn replace_page_properties(
	RequireIdentity(identity): RequireIdentity,
	State(state): State<AppState>,
	Path(page_id): Path<String>,
	body: Result<Json<ReplacePagePropertiesRequest>, JsonRejection>,
) -> Result<StatusCode, ServerError> {
	let guid = PageGuid::parse(&page_id)?;
	let Json(request) = body?;
	state
		.page_service
		.replace_page_properties(&identity, &guid, request)
		.await?;
	Ok(StatusCode::OK)
}
