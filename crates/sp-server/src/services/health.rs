// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use sp_server_api::HealthResponse;
use sp_server_db::HealthStore;

use crate::error::ServerError;

/// Run the store health check. An unhealthy store is still a successful report;
/// only a failure to run the check is an error.
#[tracing::instrument(skip(store))]
pub async fn check_health(store: &dyn HealthStore) -> Result<HealthResponse, ServerError> {
	let healthy = store.is_healthy().await?;
	if !healthy {
		tracing::warn!("health check reported an unhealthy store");
	}
	Ok(HealthResponse::from_healthy(healthy))
}
