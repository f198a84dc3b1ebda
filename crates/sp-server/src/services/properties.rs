// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use sp_common_page::{validate_properties, PageGuid};
use sp_server_api::{PagePropertiesResponse, ReplacePagePropertiesRequest};
use sp_server_auth::{Identity, PageAction};
use tracing::instrument;

use super::pages::PageService;
use crate::error::ServerError;

impl PageService {
	#[instrument(skip(self, identity), fields(page_guid = %guid, user_id = ?identity.user_id))]
	pub async fn get_page_properties(
		&self,
		identity: &Identity,
		guid: &PageGuid,
	) -> Result<PagePropertiesResponse, ServerError> {
		self.require(identity, guid, PageAction::Read).await?;
		let properties = self.stores.pages.get_page_properties(guid).await?;
		Ok(properties.into())
	}

	/// Swap a page's whole property set. The set is validated before the
	/// permission check; an invalid set writes nothing.
	#[instrument(
		skip(self, identity, request),
		fields(page_guid = %guid, user_id = ?identity.user_id, count = request.properties.len())
	)]
	pub async fn replace_page_properties(
		&self,
		identity: &Identity,
		guid: &PageGuid,
		request: ReplacePagePropertiesRequest,
	) -> Result<(), ServerError> {
		validate_properties(&request.properties)?;
		self.require(identity, guid, PageAction::Edit).await?;

		self
			.stores
			.pages
			.replace_page_properties(guid, &request.properties)
			.await?;
		tracing::info!("page properties replaced");
		Ok(())
	}
}
