// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Page HTTP handlers.

use axum::{
	extract::{rejection::JsonRejection, Path, Query, State},
	http::StatusCode,
	Json,
};
use sp_common_page::PageGuid;
use sp_server_api::{
	CreatePageRequest, CreatePageResponse, EntirePageResponse, ErrorResponse, ListPagesQuery,
	ListPagesResponse, PageResponse, UpdatePageRequest,
};

use crate::{api::AppState, auth_middleware::RequireIdentity, error::ServerError};

/// POST /pages - Create a page owned by the caller.
#[utoipa::path(
    post,
    path = "/pages",
    request_body = CreatePageRequest,
    responses(
        (status = 200, description = "Page created", body = CreatePageResponse),
        (status = 400, description = "Invalid body or guid space exhausted", body = ErrorResponse),
        (status = 401, description = "Not authenticated or not allowed to own pages", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "pages"
)]
pub async fn create_page(
	RequireIdentity(identity): RequireIdentity,
	State(state): State<AppState>,
	body: Result<Json<CreatePageRequest>, JsonRejection>,
) -> Result<Json<CreatePageResponse>, ServerError> {
	let Json(request) = body?;
	let id = state.page_service.create_page(&identity, request).await?;
	Ok(Json(CreatePageResponse { id }))
}

/// GET /pages - List the caller's visible pages in batches.
#[utoipa::path(
    get,
    path = "/pages",
    params(ListPagesQuery),
    responses(
        (status = 200, description = "One batch of visible pages", body = ListPagesResponse),
        (status = 400, description = "Invalid continuation token", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    tag = "pages"
)]
pub async fn list_pages(
	RequireIdentity(identity): RequireIdentity,
	State(state): State<AppState>,
	Query(query): Query<ListPagesQuery>,
) -> Result<Json<ListPagesResponse>, ServerError> {
	let response = state
		.page_service
		.get_pages(&identity, query.next_batch_id.as_deref())
		.await?;
	Ok(Json(response))
}

/// GET /pages/{page_id} - Reduced view of a page.
#[utoipa::path(
    get,
    path = "/pages/{page_id}",
    params(("page_id" = String, Path, description = "Page id")),
    responses(
        (status = 200, description = "Page without its detail", body = PageResponse),
        (status = 400, description = "Malformed page id", body = ErrorResponse),
        (status = 401, description = "Not authenticated or not allowed to read", body = ErrorResponse)
    ),
    tag = "pages"
)]
pub async fn get_page(
	RequireIdentity(identity): RequireIdentity,
	State(state): State<AppState>,
	Path(page_id): Path<String>,
) -> Result<Json<PageResponse>, ServerError> {
	let guid = PageGuid::parse(&page_id)?;
	let page = state.page_service.get_page(&identity, &guid).await?;
	Ok(Json(page))
}

/// GET /pages/{page_id}/full - Entire page including its detail.
#[utoipa::path(
    get,
    path = "/pages/{page_id}/full",
    params(("page_id" = String, Path, description = "Page id")),
    responses(
        (status = 200, description = "Page with its detail and partitions", body = EntirePageResponse),
        (status = 400, description = "Malformed page id", body = ErrorResponse),
        (status = 401, description = "Not authenticated or not allowed to read", body = ErrorResponse)
    ),
    tag = "pages"
)]
pub async fn get_entire_page(
	RequireIdentity(identity): RequireIdentity,
	State(state): State<AppState>,
	Path(page_id): Path<String>,
) -> Result<Json<EntirePageResponse>, ServerError> {
	let guid = PageGuid::parse(&page_id)?;
	let page = state.page_service.get_entire_page(&identity, &guid).await?;
	Ok(Json(page))
}

/// PATCH /pages/{page_id} - Overwrite the fields present in the body.
#[utoipa::path(
    patch,
    path = "/pages/{page_id}",
    params(("page_id" = String, Path, description = "Page id")),
    request_body = UpdatePageRequest,
    responses(
        (status = 200, description = "Page updated"),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 401, description = "Not authenticated or not allowed to edit", body = ErrorResponse)
    ),
    tag = "pages"
)]
pub async fn update_page(
	RequireIdentity(identity): RequireIdentity,
	State(state): State<AppState>,
	Path(page_id): Path<String>,
	body: Result<Json<UpdatePageRequest>, JsonRejection>,
) -> Result<StatusCode, ServerError> {
	let guid = PageGuid::parse(&page_id)?;
	let Json(request) = body?;
	state
		.page_service
		.update_page(&identity, &guid, request)
		.await?;
	Ok(StatusCode::OK)
}

/// DELETE /pages/{page_id} - Remove a page and its detail.
#[utoipa::path(
    delete,
    path = "/pages/{page_id}",
    params(("page_id" = String, Path, description = "Page id")),
    responses(
        (status = 200, description = "Page and detail removed"),
        (status = 400, description = "Malformed page id", body = ErrorResponse),
        (status = 401, description = "Not authenticated or not allowed to edit", body = ErrorResponse)
    ),
    tag = "pages"
)]
pub async fn delete_page(
	RequireIdentity(identity): RequireIdentity,
	State(state): State<AppState>,
	Path(page_id): Path<String>,
) -> Result<StatusCode, ServerError> {
	let guid = PageGuid::parse(&page_id)?;
	state.page_service.remove_page(&identity, &guid).await?;
	Ok(StatusCode::OK)
}
