// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Column decoding shared by the repositories. Ids and timestamps are stored
//! as TEXT (hyphenated UUIDs and RFC 3339).

use chrono::{DateTime, Utc};
use sp_common_page::IdParseError;
use std::str::FromStr;

use crate::error::DbError;

pub(crate) fn parse_id<T>(value: &str) -> Result<T, DbError>
where
	T: FromStr<Err = IdParseError>,
{
	value.parse().map_err(|e: IdParseError| DbError::Internal(e.to_string()))
}

pub(crate) fn parse_opt_id<T>(value: Option<String>) -> Result<Option<T>, DbError>
where
	T: FromStr<Err = IdParseError>,
{
	value.as_deref().map(parse_id).transpose()
}

pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DbError> {
	DateTime::parse_from_rfc3339(value)
		.map(|d| d.with_timezone(&Utc))
		.map_err(|e| DbError::Internal(e.to_string()))
}
