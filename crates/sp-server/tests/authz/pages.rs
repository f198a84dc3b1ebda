// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization tests for page routes.
//!
//! Tests verify access control for page operations:
//! - Authentication is required for all page operations
//! - Owners and the admin may read and edit any page they can see
//! - Other users are governed by the page's permission type
//! - A page the caller may not see answers exactly like a page that does not exist

use axum::http::{Method, StatusCode};
use serde_json::json;
use sp_common_page::PageGuid;

use super::support::{body_json, run_authz_cases, AuthzCase, TestApp};

fn update_body(title: &str, permission_type: &str) -> serde_json::Value {
	json!({
		"title": title,
		"summary": "updated",
		"permissionType": permission_type,
	})
}

// ============================================================================
// POST /api/pages - Create page
// ============================================================================

#[tokio::test]
async fn create_page_requires_an_owning_user() {
	let app = TestApp::new().await;
	let body = json!({"title": "Roadmap", "permissionType": "private"});
	let cases = [
		AuthzCase {
			name: "user_can_create_page",
			method: Method::POST,
			path: "/api/pages".to_string(),
			user: Some(app.fixtures.owner.clone()),
			body: Some(body.clone()),
			expected_status: StatusCode::OK,
		},
		AuthzCase {
			name: "unauthenticated_cannot_create_page",
			method: Method::POST,
			path: "/api/pages".to_string(),
			user: None,
			body: Some(body.clone()),
			expected_status: StatusCode::UNAUTHORIZED,
		},
		AuthzCase {
			name: "admin_cannot_own_a_page",
			method: Method::POST,
			path: "/api/pages".to_string(),
			user: Some(app.fixtures.admin.clone()),
			body: Some(body),
			expected_status: StatusCode::UNAUTHORIZED,
		},
	];
	run_authz_cases(&app, &cases).await;
}

#[tokio::test]
async fn create_page_resolves_references_and_seeds_a_detail() {
	let app = TestApp::new().await;
	let owner = app.fixtures.owner.clone();
	let response = app
		.post(
			"/api/pages",
			Some(&owner),
			json!({
				"title": "Standup",
				"summary": "daily",
				"permissionType": "public",
				"pageTemplateId": app.fixtures.template.guid.to_string(),
				"versionId": app.fixtures.version.guid.to_string(),
			}),
		)
		.await;
	assert_eq!(response.status(), StatusCode::OK);
	let page_id = body_json(response).await["id"]
		.as_str()
		.unwrap()
		.to_string();

	let response = app
		.get(&format!("/api/pages/{page_id}/full"), Some(&owner))
		.await;
	assert_eq!(response.status(), StatusCode::OK);
	let body = body_json(response).await;
	assert_eq!(body["id"], page_id.as_str());
	assert_eq!(body["title"], "Standup");
	assert_eq!(body["permissionType"], "public");
	assert_eq!(body["pageTemplate"]["name"], "Meeting notes");
	assert_eq!(body["version"]["name"], "v1");
	assert_eq!(body["detail"]["title"], "Standup");
	assert_eq!(body["detail"]["partitions"], json!([]));
}

#[tokio::test]
async fn create_page_validation_failures_are_bad_requests() {
	let app = TestApp::new().await;
	let owner = app.fixtures.owner.clone();

	let response = app
		.post("/api/pages", Some(&owner), json!({"title": "   "}))
		.await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(body_json(response).await["error"], "validation_failed");

	let response = app
		.post(
			"/api/pages",
			Some(&owner),
			json!({"title": "Dangling", "pageTemplateId": PageGuid::generate().to_string()}),
		)
		.await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let response = app
		.post(
			"/api/pages",
			Some(&owner),
			json!({"title": "Bad ref", "versionId": "not-a-uuid"}),
		)
		.await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let response = app
		.post_raw("/api/pages", Some(&owner), "{\"title\": ")
		.await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let response = app.get("/api/pages", Some(&owner)).await;
	assert_eq!(body_json(response).await["total"], 0);
}

// ============================================================================
// GET / PATCH / DELETE /api/pages/{id} - Permission matrix
// ============================================================================

#[tokio::test]
async fn private_page_is_owner_only() {
	let app = TestApp::new().await;
	let id = app
		.create_page(&app.fixtures.owner, "Private", "private")
		.await;
	let path = format!("/api/pages/{id}");

	let cases = [
		AuthzCase {
			name: "owner_can_read_private",
			method: Method::GET,
			path: path.clone(),
			user: Some(app.fixtures.owner.clone()),
			body: None,
			expected_status: StatusCode::OK,
		},
		AuthzCase {
			name: "admin_can_read_private",
			method: Method::GET,
			path: path.clone(),
			user: Some(app.fixtures.admin.clone()),
			body: None,
			expected_status: StatusCode::OK,
		},
		AuthzCase {
			name: "other_cannot_read_private",
			method: Method::GET,
			path: path.clone(),
			user: Some(app.fixtures.other.clone()),
			body: None,
			expected_status: StatusCode::UNAUTHORIZED,
		},
		AuthzCase {
			name: "unauthenticated_cannot_read_private",
			method: Method::GET,
			path: path.clone(),
			user: None,
			body: None,
			expected_status: StatusCode::UNAUTHORIZED,
		},
		AuthzCase {
			name: "other_cannot_edit_private",
			method: Method::PATCH,
			path: path.clone(),
			user: Some(app.fixtures.other.clone()),
			body: Some(update_body("Hijacked", "private")),
			expected_status: StatusCode::UNAUTHORIZED,
		},
		AuthzCase {
			name: "owner_can_edit_private",
			method: Method::PATCH,
			path: path.clone(),
			user: Some(app.fixtures.owner.clone()),
			body: Some(update_body("Renamed", "private")),
			expected_status: StatusCode::OK,
		},
		AuthzCase {
			name: "other_cannot_delete_private",
			method: Method::DELETE,
			path: path.clone(),
			user: Some(app.fixtures.other.clone()),
			body: None,
			expected_status: StatusCode::UNAUTHORIZED,
		},
	];
	run_authz_cases(&app, &cases).await;
}

#[tokio::test]
async fn public_page_is_readable_but_not_editable_by_others() {
	let app = TestApp::new().await;
	let id = app.create_page(&app.fixtures.owner, "Public", "public").await;
	let path = format!("/api/pages/{id}");

	let cases = [
		AuthzCase {
			name: "other_can_read_public",
			method: Method::GET,
			path: path.clone(),
			user: Some(app.fixtures.other.clone()),
			body: None,
			expected_status: StatusCode::OK,
		},
		AuthzCase {
			name: "other_can_read_full_public",
			method: Method::GET,
			path: format!("{path}/full"),
			user: Some(app.fixtures.other.clone()),
			body: None,
			expected_status: StatusCode::OK,
		},
		AuthzCase {
			name: "unauthenticated_cannot_read_public",
			method: Method::GET,
			path: path.clone(),
			user: None,
			body: None,
			expected_status: StatusCode::UNAUTHORIZED,
		},
		AuthzCase {
			name: "other_cannot_edit_public",
			method: Method::PATCH,
			path: path.clone(),
			user: Some(app.fixtures.other.clone()),
			body: Some(update_body("Hijacked", "public")),
			expected_status: StatusCode::UNAUTHORIZED,
		},
		AuthzCase {
			name: "other_cannot_delete_public",
			method: Method::DELETE,
			path: path.clone(),
			user: Some(app.fixtures.other.clone()),
			body: None,
			expected_status: StatusCode::UNAUTHORIZED,
		},
		AuthzCase {
			name: "admin_can_edit_public",
			method: Method::PATCH,
			path: path.clone(),
			user: Some(app.fixtures.admin.clone()),
			body: Some(update_body("Moderated", "public")),
			expected_status: StatusCode::OK,
		},
	];
	run_authz_cases(&app, &cases).await;
}

#[tokio::test]
async fn shared_page_is_editable_by_others() {
	let app = TestApp::new().await;
	let id = app.create_page(&app.fixtures.owner, "Shared", "shared").await;
	let path = format!("/api/pages/{id}");

	let cases = [
		AuthzCase {
			name: "other_can_read_shared",
			method: Method::GET,
			path: path.clone(),
			user: Some(app.fixtures.other.clone()),
			body: None,
			expected_status: StatusCode::OK,
		},
		AuthzCase {
			name: "other_can_edit_shared",
			method: Method::PATCH,
			path: path.clone(),
			user: Some(app.fixtures.other.clone()),
			body: Some(update_body("Co-written", "shared")),
			expected_status: StatusCode::OK,
		},
		AuthzCase {
			name: "unauthenticated_cannot_edit_shared",
			method: Method::PATCH,
			path: path.clone(),
			user: None,
			body: Some(update_body("Anonymous", "shared")),
			expected_status: StatusCode::UNAUTHORIZED,
		},
		AuthzCase {
			name: "other_can_delete_shared",
			method: Method::DELETE,
			path: path.clone(),
			user: Some(app.fixtures.other.clone()),
			body: None,
			expected_status: StatusCode::OK,
		},
	];
	run_authz_cases(&app, &cases).await;
}

// ============================================================================
// Update and delete effects
// ============================================================================

#[tokio::test]
async fn update_overwrites_fields_but_keeps_owner() {
	let app = TestApp::new().await;
	let owner = app.fixtures.owner.clone();
	let id = app.create_page(&owner, "Draft", "private").await;

	let response = app
		.patch(
			&format!("/api/pages/{id}"),
			Some(&owner),
			json!({
				"title": "Final",
				"summary": "",
				"permissionType": "shared",
				"versionId": app.fixtures.version.guid.to_string(),
			}),
		)
		.await;
	assert_eq!(response.status(), StatusCode::OK);

	let page = {
		let response = app.get(&format!("/api/pages/{id}"), Some(&owner)).await;
		body_json(response).await
	};
	assert_eq!(page["title"], "Final");
	assert_eq!(page["summary"], "");
	assert_eq!(page["permissionType"], "shared");
	assert_eq!(page["version"]["name"], "v1");
	assert!(page["pageTemplate"].is_null());

	let response = app
		.get(&format!("/api/pages/{id}"), Some(&app.fixtures.other))
		.await;
	assert_eq!(response.status(), StatusCode::OK);
	let seen_by_other = body_json(response).await;
	assert_eq!(seen_by_other["ownerId"], page["ownerId"]);
}

#[tokio::test]
async fn title_only_update_keeps_access_and_references() {
	let app = TestApp::new().await;
	let owner = app.fixtures.owner.clone();
	let response = app
		.post(
			"/api/pages",
			Some(&owner),
			json!({
				"title": "Team wiki",
				"summary": "shared notes",
				"permissionType": "shared",
				"pageTemplateId": app.fixtures.template.guid.to_string(),
			}),
		)
		.await;
	let id = body_json(response).await["id"]
		.as_str()
		.unwrap()
		.to_string();

	let response = app
		.patch(
			&format!("/api/pages/{id}"),
			Some(&owner),
			json!({"title": "Renamed"}),
		)
		.await;
	assert_eq!(response.status(), StatusCode::OK);

	let response = app
		.get(&format!("/api/pages/{id}"), Some(&app.fixtures.other))
		.await;
	assert_eq!(response.status(), StatusCode::OK);
	let page = body_json(response).await;
	assert_eq!(page["title"], "Renamed");
	assert_eq!(page["summary"], "shared notes");
	assert_eq!(page["permissionType"], "shared");
	assert_eq!(page["pageTemplate"]["name"], "Meeting notes");

	let response = app
		.patch(
			&format!("/api/pages/{id}"),
			Some(&owner),
			json!({"pageTemplateId": null}),
		)
		.await;
	assert_eq!(response.status(), StatusCode::OK);
	let page = body_json(app.get(&format!("/api/pages/{id}"), Some(&owner)).await).await;
	assert!(page["pageTemplate"].is_null());
	assert_eq!(page["title"], "Renamed");
}

#[tokio::test]
async fn deleted_page_is_gone_with_its_detail() {
	let app = TestApp::new().await;
	let owner = app.fixtures.owner.clone();
	let id = app.create_page(&owner, "Scratch", "private").await;
	let detail_id = app.detail_id(&id, &owner).await;

	let response = app.delete(&format!("/api/pages/{id}"), Some(&owner)).await;
	assert_eq!(response.status(), StatusCode::OK);

	let response = app.get(&format!("/api/pages/{id}"), Some(&owner)).await;
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

	let response = app
		.patch(
			&format!("/api/pages/{id}/details/{detail_id}"),
			Some(&owner),
			json!({"title": "Revived", "partitions": []}),
		)
		.await;
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

	let response = app.get("/api/pages", Some(&owner)).await;
	assert_eq!(body_json(response).await["total"], 0);
}

// ============================================================================
// Existence leak policy and malformed ids
// ============================================================================

#[tokio::test]
async fn hidden_page_and_missing_page_are_indistinguishable() {
	let app = TestApp::new().await;
	let id = app
		.create_page(&app.fixtures.owner, "Secret", "private")
		.await;
	let missing = PageGuid::generate();

	let hidden = app
		.get(&format!("/api/pages/{id}"), Some(&app.fixtures.other))
		.await;
	let absent = app
		.get(&format!("/api/pages/{missing}"), Some(&app.fixtures.other))
		.await;

	assert_eq!(hidden.status(), absent.status());
	assert_eq!(body_json(hidden).await, body_json(absent).await);
}

#[tokio::test]
async fn malformed_page_id_is_a_bad_request() {
	let app = TestApp::new().await;
	let response = app
		.get("/api/pages/not-a-guid", Some(&app.fixtures.owner))
		.await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(body_json(response).await["error"], "validation_failed");
}

#[tokio::test]
async fn openapi_document_needs_no_credentials() {
	let app = TestApp::new().await;
	let response = app.get("/api/openapi.json", None).await;
	assert_eq!(response.status(), StatusCode::OK);
	let body = body_json(response).await;
	assert!(body["paths"].get("/pages").is_some());
}
