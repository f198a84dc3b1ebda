// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{PageDetailGuid, PageGuid};
use crate::partition::Partition;

/// The body of a page. Exactly one detail exists per page and it is removed
/// together with the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDetail {
	pub guid: PageDetailGuid,
	pub page_guid: PageGuid,
	pub title: String,
	pub summary: String,
	pub partitions: Vec<Partition>,
	pub updated_at: DateTime<Utc>,
}

impl PageDetail {
	/// The empty detail created alongside a new page.
	pub fn empty_for(page_guid: PageGuid, title: &str, now: DateTime<Utc>) -> Self {
		Self {
			guid: PageDetailGuid::generate(),
			page_guid,
			title: title.to_string(),
			summary: String::new(),
			partitions: Vec::new(),
			updated_at: now,
		}
	}
}
