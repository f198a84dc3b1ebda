// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error classification for every page operation.
//!
//! [`ServerError`] is closed: handlers and services only ever fail with one of
//! these variants, and [`IntoResponse`] is the single place they become wire
//! status codes.

use axum::{
	extract::rejection::JsonRejection,
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use sp_common_page::{IdParseError, PartitionError, PropertyError};
use sp_server_api::{ErrorResponse, PageFieldsError};
use sp_server_db::DbError;

use crate::pagination::CursorError;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// No identity could be established for the request.
	#[error("authentication required")]
	Unauthenticated,

	/// The route requires a privilege the caller does not hold.
	#[error("route requires admin privileges")]
	Unauthorized,

	/// The caller may not act on the targeted page.
	#[error("not authorized to access this page")]
	NotAuthorized,

	#[error("validation failed: {0}")]
	ValidationFailed(String),

	#[error("duplicate entry: {0}")]
	DuplicateEntry(String),

	#[error("not found: {0}")]
	NotFound(String),

	#[error("internal error: {0}")]
	Internal(String),
}

impl ServerError {
	pub fn status(&self) -> StatusCode {
		match self {
			Self::Unauthenticated | Self::Unauthorized | Self::NotAuthorized => {
				StatusCode::UNAUTHORIZED
			}
			Self::ValidationFailed(_) | Self::DuplicateEntry(_) => StatusCode::BAD_REQUEST,
			Self::NotFound(_) => StatusCode::NOT_FOUND,
			Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Stable machine-readable code placed in the `error` field.
	pub fn code(&self) -> &'static str {
		match self {
			Self::Unauthenticated => "unauthenticated",
			Self::Unauthorized => "unauthorized",
			Self::NotAuthorized => "not_authorized",
			Self::ValidationFailed(_) => "validation_failed",
			Self::DuplicateEntry(_) => "duplicate_entry",
			Self::NotFound(_) => "not_found",
			Self::Internal(_) => "internal_error",
		}
	}

	fn public_message(&self) -> String {
		match self {
			Self::Unauthenticated => "Authentication required".to_string(),
			Self::Unauthorized => "Admin privileges required".to_string(),
			Self::NotAuthorized => "Not authorized".to_string(),
			Self::ValidationFailed(msg) | Self::DuplicateEntry(msg) | Self::NotFound(msg) => {
				msg.clone()
			}
			Self::Internal(_) => INTERNAL_MESSAGE.to_string(),
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		if let Self::Internal(detail) = &self {
			tracing::error!(error = %detail, "internal error");
		}

		let status = self.status();
		let body = ErrorResponse::new(self.code(), self.public_message());
		(status, Json(body)).into_response()
	}
}

impl From<DbError> for ServerError {
	fn from(e: DbError) -> Self {
		match e {
			DbError::Conflict(msg) => ServerError::DuplicateEntry(msg),
			DbError::NotFound(msg) => ServerError::NotFound(msg),
			DbError::Sqlx(e) => ServerError::Internal(format!("database error: {e}")),
			DbError::Internal(msg) => ServerError::Internal(msg),
			DbError::Serialization(e) => ServerError::Internal(format!("serialization error: {e}")),
		}
	}
}

impl From<IdParseError> for ServerError {
	fn from(e: IdParseError) -> Self {
		ServerError::ValidationFailed(e.to_string())
	}
}

impl From<PageFieldsError> for ServerError {
	fn from(e: PageFieldsError) -> Self {
		ServerError::ValidationFailed(e.to_string())
	}
}

impl From<PartitionError> for ServerError {
	fn from(e: PartitionError) -> Self {
		ServerError::ValidationFailed(e.to_string())
	}
}

impl From<PropertyError> for ServerError {
	fn from(e: PropertyError) -> Self {
		ServerError::ValidationFailed(e.to_string())
	}
}

impl From<CursorError> for ServerError {
	fn from(_: CursorError) -> Self {
		ServerError::ValidationFailed("invalid nextBatchId".to_string())
	}
}

impl From<JsonRejection> for ServerError {
	fn from(e: JsonRejection) -> Self {
		ServerError::ValidationFailed(e.body_text())
	}
}
