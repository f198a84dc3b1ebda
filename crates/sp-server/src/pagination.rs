// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Continuation tokens for page listings.
//!
//! A token names the last page guid of the previous batch. It is URL-safe
//! base64 of `v1:<guid>` and carries no identity; visibility is re-applied on
//! every call.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use sp_common_page::PageGuid;

const TOKEN_PREFIX: &str = "v1:";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
	#[error("cursor is not valid base64")]
	Encoding,
	#[error("cursor has an unknown format")]
	Format,
	#[error("cursor key is not a page id")]
	Key,
}

pub fn encode_cursor(last: &PageGuid) -> String {
	URL_SAFE_NO_PAD.encode(format!("{TOKEN_PREFIX}{last}"))
}

/// Decode a token into the key to resume after. `None` or an empty token
/// starts from the beginning.
pub fn decode_cursor(token: Option<&str>) -> Result<Option<PageGuid>, CursorError> {
	let token = match token.map(str::trim) {
		None | Some("") => return Ok(None),
		Some(token) => token,
	};

	let bytes = URL_SAFE_NO_PAD
		.decode(token)
		.map_err(|_| CursorError::Encoding)?;
	let text = String::from_utf8(bytes).map_err(|_| CursorError::Format)?;
	let key = text
		.strip_prefix(TOKEN_PREFIX)
		.ok_or(CursorError::Format)?;

	PageGuid::parse(key).map(Some).map_err(|_| CursorError::Key)
}
