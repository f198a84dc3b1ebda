// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use chrono::Utc;
use sp_common_page::{parse_partitions, PageDetailGuid, PageGuid};
use sp_server_api::UpdatePageDetailRequest;
use sp_server_auth::{Identity, PageAction};
use tracing::instrument;

use super::pages::{validate_title_and_summary, PageService};
use crate::error::ServerError;

impl PageService {
	/// Overwrite a page's detail. The whole body is validated before the
	/// permission check, and nothing is written unless every partition is valid.
	#[instrument(
		skip(self, identity, request),
		fields(page_guid = %page_guid, detail_guid = %detail_guid, user_id = ?identity.user_id)
	)]
	pub async fn update_page_detail(
		&self,
		identity: &Identity,
		page_guid: &PageGuid,
		detail_guid: &PageDetailGuid,
		request: UpdatePageDetailRequest,
	) -> Result<(), ServerError> {
		validate_title_and_summary(&request.title, &request.summary)?;
		let partitions = parse_partitions(&request.partitions)?;

		self.require(identity, page_guid, PageAction::Edit).await?;

		let mut detail = self
			.stores
			.details
			.get_detail(detail_guid)
			.await?
			.filter(|d| &d.page_guid == page_guid)
			.ok_or_else(|| ServerError::NotFound("page detail not found".to_string()))?;

		detail.title = request.title;
		detail.summary = request.summary;
		detail.partitions = partitions;
		detail.updated_at = Utc::now();

		self.stores.details.update_detail(&detail).await?;
		tracing::info!(partitions = detail.partitions.len(), "page detail updated");
		Ok(())
	}
}
