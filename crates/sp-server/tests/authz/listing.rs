// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Batched page listing over HTTP.

use std::collections::HashSet;

use axum::http::StatusCode;
use serde_json::Value;

use super::support::{body_json, TestApp, BATCH_SIZE};

fn titles(batch: &Value) -> Vec<String> {
	batch["batch"]
		.as_array()
		.unwrap()
		.iter()
		.map(|p| p["title"].as_str().unwrap().to_string())
		.collect()
}

fn next_token(batch: &Value) -> Option<String> {
	batch.get("nextBatch").map(|next| {
		assert_eq!(next["paramKey"], "nextBatchId");
		next["paramValue"].as_str().unwrap().to_string()
	})
}

#[tokio::test]
async fn twelve_pages_arrive_in_three_batches() {
	let app = TestApp::new().await;
	let owner = app.fixtures.owner.clone();
	for n in 1..=12 {
		app.create_page(&owner, &format!("Page {n:02}"), "private").await;
	}

	let first = body_json(app.get("/api/pages", Some(&owner)).await).await;
	assert_eq!(first["total"], 12);
	assert_eq!(titles(&first).len(), BATCH_SIZE as usize);
	let token = next_token(&first).expect("first batch has a cursor");

	let second = body_json(
		app
			.get(&format!("/api/pages?nextBatchId={token}"), Some(&owner))
			.await,
	)
	.await;
	assert_eq!(second["total"], 12);
	assert_eq!(titles(&second).len(), BATCH_SIZE as usize);
	let token = next_token(&second).expect("second batch has a cursor");

	let third = body_json(
		app
			.get(&format!("/api/pages?nextBatchId={token}"), Some(&owner))
			.await,
	)
	.await;
	assert_eq!(titles(&third).len(), 2);
	assert!(next_token(&third).is_none());

	let seen: HashSet<String> = titles(&first)
		.into_iter()
		.chain(titles(&second))
		.chain(titles(&third))
		.collect();
	assert_eq!(seen.len(), 12);
}

#[tokio::test]
async fn listing_only_counts_visible_pages() {
	let app = TestApp::new().await;
	let owner = app.fixtures.owner.clone();
	let other = app.fixtures.other.clone();
	app.create_page(&owner, "Mine", "private").await;
	app.create_page(&owner, "Everyone", "public").await;
	app.create_page(&owner, "Together", "shared").await;
	app.create_page(&other, "Theirs", "private").await;

	let as_other = body_json(app.get("/api/pages", Some(&other)).await).await;
	assert_eq!(as_other["total"], 3);
	let mut seen = titles(&as_other);
	seen.sort();
	assert_eq!(seen, vec!["Everyone", "Theirs", "Together"]);

	let as_admin = body_json(app.get("/api/pages", Some(&app.fixtures.admin)).await).await;
	assert_eq!(as_admin["total"], 4);

	let response = app.get("/api/pages", None).await;
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn replayed_cursor_never_reveals_private_pages() {
	let app = TestApp::new().await;
	let owner = app.fixtures.owner.clone();
	let other = app.fixtures.other.clone();
	for n in 1..=8 {
		app.create_page(&owner, &format!("Secret {n:02}"), "private").await;
		app.create_page(&owner, &format!("Open {n:02}"), "public").await;
	}

	let first = body_json(app.get("/api/pages", Some(&owner)).await).await;
	assert_eq!(first["total"], 16);
	let mut token = next_token(&first);
	assert!(token.is_some());

	let mut replayed = Vec::new();
	while let Some(cursor) = token {
		let response = app
			.get(&format!("/api/pages?nextBatchId={cursor}"), Some(&other))
			.await;
		assert_eq!(response.status(), StatusCode::OK);
		let batch = body_json(response).await;
		assert_eq!(batch["total"], 8);
		for page in batch["batch"].as_array().unwrap() {
			assert_eq!(page["permissionType"], "public", "leaked {}", page["title"]);
		}
		replayed.extend(titles(&batch));
		token = next_token(&batch);
	}

	assert!(replayed.iter().all(|title| title.starts_with("Open")));
}

#[tokio::test]
async fn garbage_cursor_is_a_bad_request() {
	let app = TestApp::new().await;
	let response = app
		.get("/api/pages?nextBatchId=not-a-cursor", Some(&app.fixtures.owner))
		.await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
