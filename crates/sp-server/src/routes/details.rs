// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use axum::{
	extract::{rejection::JsonRejection, Path, State},
	http::StatusCode,
	Json,
};
use sp_common_page::{PageDetailGuid, PageGuid};
use sp_server_api::{ErrorResponse, UpdatePageDetailRequest};

use crate::{api::AppState, auth_middleware::RequireIdentity, error::ServerError};

/// PATCH /pages/{page_id}/details/{detail_id} - Overwrite a page detail.
#[utoipa::path(
    patch,
    path = "/pages/{page_id}/details/{detail_id}",
    params(
        ("page_id" = String, Path, description = "Page id"),
        ("detail_id" = String, Path, description = "Detail id belonging to the page")
    ),
    request_body = UpdatePageDetailRequest,
    responses(
        (status = 200, description = "Detail overwritten"),
        (status = 400, description = "Invalid title or partitions", body = ErrorResponse),
        (status = 401, description = "Not authenticated or not allowed to edit", body = ErrorResponse),
        (status = 404, description = "Detail does not belong to the page", body = ErrorResponse)
    ),
    tag = "pages"
)]
pub async fn update_page_detail(
	RequireIdentity(identity): RequireIdentity,
	State(state): State<AppState>,
	Path((page_id, detail_id)): Path<(String, String)>,
	body: Result<Json<UpdatePageDetailRequest>, JsonRejection>,
) -> Result<StatusCode, ServerError> {
	let page_guid = PageGuid::parse(&page_id)?;
	let detail_guid = PageDetailGuid::parse(&detail_id)?;
	let Json(request) = body?;

	state
		.page_service
		.update_page_detail(&identity, &page_guid, &detail_guid, request)
		.await?;
	Ok(StatusCode::OK)
}
