// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization tests for the health diagnostic route.
//!
//! Only the admin secret holder may see health. Everyone else gets 401 and no
//! payload beyond the error body.

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde_json::json;

use super::support::{body_json, run_authz_cases, AuthzCase, FixedHealth, TestApp, TestUser};

#[tokio::test]
async fn unauthenticated_caller_gets_no_health_payload() {
	let app = TestApp::new().await;
	let response = app.get("/api/healthcheck", None).await;
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

	let body = body_json(response).await;
	assert_eq!(body["error"], "unauthenticated");
	assert!(body.get("status").is_none());
}

#[tokio::test]
async fn non_admin_callers_are_rejected() {
	let app = TestApp::new().await;
	let cases = [
		AuthzCase {
			name: "user_cannot_read_health",
			method: Method::GET,
			path: "/api/healthcheck".to_string(),
			user: Some(app.fixtures.owner.clone()),
			body: None,
			expected_status: StatusCode::UNAUTHORIZED,
		},
		AuthzCase {
			name: "wrong_secret_cannot_read_health",
			method: Method::GET,
			path: "/api/healthcheck".to_string(),
			user: Some(TestUser::WrongSecret),
			body: None,
			expected_status: StatusCode::UNAUTHORIZED,
		},
		AuthzCase {
			name: "admin_can_read_health",
			method: Method::GET,
			path: "/api/healthcheck".to_string(),
			user: Some(app.fixtures.admin.clone()),
			body: None,
			expected_status: StatusCode::OK,
		},
	];
	run_authz_cases(&app, &cases).await;
}

#[tokio::test]
async fn admin_sees_ok_when_store_is_healthy() {
	let app = TestApp::new().await;
	let response = app.get("/api/healthcheck", Some(&app.fixtures.admin)).await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn admin_sees_error_status_when_store_is_unhealthy() {
	let app = TestApp::with_health_store(Arc::new(FixedHealth(Ok(false)))).await;
	let response = app.get("/api/healthcheck", Some(&app.fixtures.admin)).await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_json(response).await, json!({"status": "error"}));
}

#[tokio::test]
async fn failed_health_check_is_an_internal_error() {
	let app = TestApp::with_health_store(Arc::new(FixedHealth(Err(())))).await;
	let response = app.get("/api/healthcheck", Some(&app.fixtures.admin)).await;
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

	let body = body_json(response).await;
	assert_eq!(body["error"], "internal_error");
	assert!(!body["message"].as_str().unwrap().contains("health source unavailable"));
}
