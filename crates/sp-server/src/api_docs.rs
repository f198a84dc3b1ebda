// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! OpenAPI document for the page API.

use utoipa::OpenApi;

use crate::routes;

#[derive(OpenApi)]
#[openapi(
	info(
		title = "sp-server",
		description = "Collaborative page service. Paths are relative to the configured API prefix."
	),
	servers((url = "/api", description = "Default API prefix")),
	paths(
		routes::health::health_check,
		routes::pages::create_page,
		routes::pages::list_pages,
		routes::pages::get_page,
		routes::pages::get_entire_page,
		routes::pages::update_page,
		routes::pages::delete_page,
		routes::details::update_page_detail,
		routes::properties::get_page_properties,
		routes::properties::replace_page_properties,
	),
	components(schemas(
		sp_server_api::ErrorResponse,
		sp_server_api::HealthResponse,
		sp_server_api::HealthStatus,
		sp_server_api::CreatePageRequest,
		sp_server_api::CreatePageResponse,
		sp_server_api::UpdatePageRequest,
		sp_server_api::UpdatePageDetailRequest,
		sp_server_api::PageResponse,
		sp_server_api::EntirePageResponse,
		sp_server_api::PageDetailResponse,
		sp_server_api::PageTemplateResponse,
		sp_server_api::VersionResponse,
		sp_server_api::ListPagesResponse,
		sp_server_api::NextBatch,
		sp_server_api::ReplacePagePropertiesRequest,
		sp_server_api::PagePropertiesResponse,
		sp_common_page::PermissionType,
		sp_common_page::Partition,
		sp_common_page::TextPartition,
		sp_common_page::HeadingPartition,
		sp_common_page::ListPartition,
		sp_common_page::PageProperty,
	)),
	tags(
		(name = "health", description = "Admin-only diagnostics"),
		(name = "pages", description = "Pages, details and listings")
	)
)]
pub struct ApiDoc;
