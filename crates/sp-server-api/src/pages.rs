// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page and page detail request/response bodies. Field names are camelCase on
//! the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sp_common_page::{
	IdParseError, Page, PageDetail, PageDetailGuid, PageGuid, PageProperty, PageTemplate,
	PageTemplateGuid, Partition, PermissionType, UserId, Version, VersionGuid,
};

#[cfg(feature = "openapi")]
use utoipa::{IntoParams, ToSchema};

/// Query parameter carrying the listing cursor.
pub const NEXT_BATCH_PARAM_KEY: &str = "nextBatchId";

#[derive(Debug, thiserror::Error)]
pub enum PageFieldsError {
	#[error(transparent)]
	InvalidReference(#[from] IdParseError),
}

/// Request body for creating a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub summary: String,
	#[serde(default)]
	pub permission_type: PermissionType,
	#[serde(default)]
	pub page_template_id: Option<String>,
	#[serde(default)]
	pub version_id: Option<String>,
}

/// Request body for updating a page. Absent fields keep their current value.
///
/// The references are tri-state: absent keeps the reference, `null` or a
/// blank string clears it, and an id replaces it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageRequest {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub summary: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub permission_type: Option<PermissionType>,
	#[serde(
		default,
		deserialize_with = "deserialize_optional_nullable",
		skip_serializing_if = "Option::is_none"
	)]
	#[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
	pub page_template_id: Option<Option<String>>,
	#[serde(
		default,
		deserialize_with = "deserialize_optional_nullable",
		skip_serializing_if = "Option::is_none"
	)]
	#[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
	pub version_id: Option<Option<String>>,
}

/// A reference change: `None` keeps the current value, `Some(None)` clears it.
pub type ReferenceChange<T> = Option<Option<T>>;

/// Present-but-null becomes `Some(None)`; a missing key stays `None` via `default`.
fn deserialize_optional_nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
	D: serde::Deserializer<'de>,
{
	Option::<String>::deserialize(deserializer).map(Some)
}

impl CreatePageRequest {
	pub fn references(
		&self,
	) -> Result<(Option<PageTemplateGuid>, Option<VersionGuid>), PageFieldsError> {
		parse_references(
			self.page_template_id.as_deref(),
			self.version_id.as_deref(),
		)
	}
}

impl UpdatePageRequest {
	pub fn references(
		&self,
	) -> Result<(ReferenceChange<PageTemplateGuid>, ReferenceChange<VersionGuid>), PageFieldsError> {
		let template = match &self.page_template_id {
			Some(raw) => Some(parse_reference(raw.as_deref(), PageTemplateGuid::parse)?),
			None => None,
		};
		let version = match &self.version_id {
			Some(raw) => Some(parse_reference(raw.as_deref(), VersionGuid::parse)?),
			None => None,
		};
		Ok((template, version))
	}
}

/// Blank ids mean "no reference".
fn parse_reference<T>(
	raw: Option<&str>,
	parse: fn(&str) -> Result<T, IdParseError>,
) -> Result<Option<T>, IdParseError> {
	match raw.map(str::trim).filter(|s| !s.is_empty()) {
		Some(raw) => parse(raw).map(Some),
		None => Ok(None),
	}
}

fn parse_references(
	template: Option<&str>,
	version: Option<&str>,
) -> Result<(Option<PageTemplateGuid>, Option<VersionGuid>), PageFieldsError> {
	Ok((
		parse_reference(template, PageTemplateGuid::parse)?,
		parse_reference(version, VersionGuid::parse)?,
	))
}

/// Request body for overwriting a page detail.
///
/// Partitions arrive untyped and are structurally validated by the server
/// before anything is written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageDetailRequest {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub summary: String,
	#[serde(default)]
	#[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
	pub partitions: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreatePageResponse {
	pub id: PageGuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PageTemplateResponse {
	pub id: PageTemplateGuid,
	pub name: String,
}

impl From<PageTemplate> for PageTemplateResponse {
	fn from(template: PageTemplate) -> Self {
		Self {
			id: template.guid,
			name: template.name,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct VersionResponse {
	pub id: VersionGuid,
	pub name: String,
}

impl From<Version> for VersionResponse {
	fn from(version: Version) -> Self {
		Self {
			id: version.guid,
			name: version.name,
		}
	}
}

/// Reduced view of a page: everything except the detail body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
	pub id: PageGuid,
	pub title: String,
	pub summary: String,
	pub owner_id: UserId,
	pub permission_type: PermissionType,
	/// Null when the page has no template or the reference no longer resolves.
	pub page_template: Option<PageTemplateResponse>,
	pub version: Option<VersionResponse>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl PageResponse {
	pub fn new(page: Page, template: Option<PageTemplate>, version: Option<Version>) -> Self {
		Self {
			id: page.guid,
			title: page.title,
			summary: page.summary,
			owner_id: page.owner_id,
			permission_type: page.permission_type,
			page_template: template.map(Into::into),
			version: version.map(Into::into),
			created_at: page.created_at,
			updated_at: page.updated_at,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PageDetailResponse {
	pub id: PageDetailGuid,
	pub title: String,
	pub summary: String,
	pub partitions: Vec<Partition>,
	pub updated_at: DateTime<Utc>,
}

impl From<PageDetail> for PageDetailResponse {
	fn from(detail: PageDetail) -> Self {
		Self {
			id: detail.guid,
			title: detail.title,
			summary: detail.summary,
			partitions: detail.partitions,
			updated_at: detail.updated_at,
		}
	}
}

/// Full view of a page including its detail and partitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct EntirePageResponse {
	#[serde(flatten)]
	pub page: PageResponse,
	pub detail: Option<PageDetailResponse>,
}

/// Replacement property set. Order is kept; an empty list clears every property.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ReplacePagePropertiesRequest {
	#[serde(default)]
	pub properties: Vec<PageProperty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PagePropertiesResponse {
	pub properties: Vec<PageProperty>,
}

impl From<Vec<PageProperty>> for PagePropertiesResponse {
	fn from(properties: Vec<PageProperty>) -> Self {
		Self { properties }
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct ListPagesQuery {
	/// Continuation token from a previous response's `nextBatch`.
	#[serde(rename = "nextBatchId")]
	pub next_batch_id: Option<String>,
}

/// Where to find the next batch: echo `paramValue` back as the `paramKey`
/// query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NextBatch {
	pub param_key: String,
	pub param_value: String,
}

impl NextBatch {
	pub fn new(token: impl Into<String>) -> Self {
		Self {
			param_key: NEXT_BATCH_PARAM_KEY.to_string(),
			param_value: token.into(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ListPagesResponse {
	pub batch: Vec<PageResponse>,
	/// Number of pages visible to the caller across all batches.
	pub total: u64,
	/// Absent on the last batch.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub next_batch: Option<NextBatch>,
}
