// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod error;
pub mod health;
pub mod pages;

pub use error::ErrorResponse;
pub use health::{HealthResponse, HealthStatus};
pub use pages::{
	CreatePageRequest, CreatePageResponse, EntirePageResponse, ListPagesQuery, ListPagesResponse,
	NextBatch, PageDetailResponse, PageFieldsError, PagePropertiesResponse, PageResponse,
	PageTemplateResponse, ReferenceChange, ReplacePagePropertiesRequest, UpdatePageDetailRequest, UpdatePageRequest, VersionResponse, NEXT_BATCH_PARAM_KEY,
};
