// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page detail overwrite over HTTP.

use axum::http::{Method, StatusCode};
use serde_json::json;
use sp_common_page::PageDetailGuid;

use super::support::{body_json, run_authz_cases, AuthzCase, TestApp};

fn detail_body() -> serde_json::Value {
	json!({
		"title": "Agenda",
		"summary": "Monday sync",
		"partitions": [
			{"type": "heading", "value": {"text": "Agenda", "level": 1}},
			{"type": "list", "value": {"items": ["status", "blockers"], "ordered": true}},
			{"type": "divider"},
		],
	})
}

#[tokio::test]
async fn detail_edit_follows_page_permissions() {
	let app = TestApp::new().await;
	let owner = app.fixtures.owner.clone();
	let public_id = app.create_page(&owner, "Public", "public").await;
	let public_detail = app.detail_id(&public_id, &owner).await;
	let shared_id = app.create_page(&owner, "Shared", "shared").await;
	let shared_detail = app.detail_id(&shared_id, &owner).await;

	let cases = [
		AuthzCase {
			name: "owner_can_edit_public_detail",
			method: Method::PATCH,
			path: format!("/api/pages/{public_id}/details/{public_detail}"),
			user: Some(owner.clone()),
			body: Some(detail_body()),
			expected_status: StatusCode::OK,
		},
		AuthzCase {
			name: "other_cannot_edit_public_detail",
			method: Method::PATCH,
			path: format!("/api/pages/{public_id}/details/{public_detail}"),
			user: Some(app.fixtures.other.clone()),
			body: Some(detail_body()),
			expected_status: StatusCode::UNAUTHORIZED,
		},
		AuthzCase {
			name: "other_can_edit_shared_detail",
			method: Method::PATCH,
			path: format!("/api/pages/{shared_id}/details/{shared_detail}"),
			user: Some(app.fixtures.other.clone()),
			body: Some(detail_body()),
			expected_status: StatusCode::OK,
		},
		AuthzCase {
			name: "unauthenticated_cannot_edit_detail",
			method: Method::PATCH,
			path: format!("/api/pages/{shared_id}/details/{shared_detail}"),
			user: None,
			body: Some(detail_body()),
			expected_status: StatusCode::UNAUTHORIZED,
		},
	];
	run_authz_cases(&app, &cases).await;
}

#[tokio::test]
async fn detail_overwrite_is_visible_in_full_page() {
	let app = TestApp::new().await;
	let owner = app.fixtures.owner.clone();
	let id = app.create_page(&owner, "Sync", "private").await;
	let detail_id = app.detail_id(&id, &owner).await;

	let response = app
		.patch(
			&format!("/api/pages/{id}/details/{detail_id}"),
			Some(&owner),
			detail_body(),
		)
		.await;
	assert_eq!(response.status(), StatusCode::OK);

	let response = app.get(&format!("/api/pages/{id}/full"), Some(&owner)).await;
	let body = body_json(response).await;
	assert_eq!(body["title"], "Sync");
	assert_eq!(body["detail"]["title"], "Agenda");
	assert_eq!(body["detail"]["summary"], "Monday sync");
	let partitions = body["detail"]["partitions"].as_array().unwrap();
	assert_eq!(partitions.len(), 3);
	assert_eq!(partitions[0]["type"], "heading");
	assert_eq!(partitions[2]["type"], "divider");
}

#[tokio::test]
async fn invalid_partitions_leave_the_detail_untouched() {
	let app = TestApp::new().await;
	let owner = app.fixtures.owner.clone();
	let id = app.create_page(&owner, "Notes", "private").await;
	let detail_id = app.detail_id(&id, &owner).await;
	let path = format!("/api/pages/{id}/details/{detail_id}");

	let response = app
		.patch(
			&path,
			Some(&owner),
			json!({
				"title": "Broken",
				"partitions": [
					{"type": "text", "value": {"text": "fine"}},
					{"type": "heading", "value": {"text": "too deep", "level": 9}},
				],
			}),
		)
		.await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(body_json(response).await["error"], "validation_failed");

	let response = app
		.patch(
			&path,
			Some(&owner),
			json!({"title": "Broken", "partitions": [{"type": "video"}]}),
		)
		.await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let response = app.get(&format!("/api/pages/{id}/full"), Some(&owner)).await;
	let body = body_json(response).await;
	assert_eq!(body["detail"]["title"], "Notes");
	assert_eq!(body["detail"]["partitions"], json!([]));
}

#[tokio::test]
async fn detail_of_another_page_is_not_found() {
	let app = TestApp::new().await;
	let owner = app.fixtures.owner.clone();
	let first = app.create_page(&owner, "First", "private").await;
	let second = app.create_page(&owner, "Second", "private").await;
	let second_detail = app.detail_id(&second, &owner).await;

	let response = app
		.patch(
			&format!("/api/pages/{first}/details/{second_detail}"),
			Some(&owner),
			detail_body(),
		)
		.await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let response = app
		.patch(
			&format!("/api/pages/{first}/details/{}", PageDetailGuid::generate()),
			Some(&owner),
			detail_body(),
		)
		.await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
