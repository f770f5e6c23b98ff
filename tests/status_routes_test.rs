// ABOUTME: Integration tests for root, diagnostic, and health routes plus the middleware stack
// ABOUTME: Covers HEAD support, the /test report, CORS mirroring, and x-request-id handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{create_test_resources, seeded_app, test_config};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use signify_learn::config::{CorsOrigins, ServerConfig};
use signify_learn::resources::ServerResources;
use signify_learn::server::build_router;
use std::sync::Arc;

#[tokio::test]
async fn test_root_message() {
    let (app, _) = seeded_app().await;

    let body: Value = AxumTestRequest::get("/").send(app.clone()).await.json();
    assert_eq!(body, json!({"message": "SignifyLearn API running"}));

    let response = AxumTestRequest::head("/").send(app).await;
    assert_eq!(response.status(), 200);
    assert!(response.bytes().is_empty());
}

#[tokio::test]
async fn test_connection_report_with_store() {
    let (app, _) = seeded_app().await;

    let body: Value = AxumTestRequest::get("/test").send(app.clone()).await.json();
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "memory");
    assert_eq!(body["connection_status"], "Connected");

    let collections: Vec<String> = serde_json::from_value(body["collections"].clone()).unwrap();
    for name in ["favorite", "gesture", "module", "progress", "quizquestion", "user"] {
        assert!(collections.iter().any(|c| c == name), "{name} missing");
    }
    assert!(collections.len() <= 10);

    let response = AxumTestRequest::head("/test").send(app).await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_connection_report_without_explicit_url() {
    let resources = create_test_resources().await;
    let resources = Arc::new(ServerResources::new(
        resources.store.clone(),
        ServerConfig {
            database_url_set: false,
            ..test_config()
        },
    ));

    let body: Value = AxumTestRequest::get("/test")
        .send(build_router(&resources))
        .await
        .json();
    assert_eq!(body["database_url"], "❌ Not Set");
}

#[tokio::test]
async fn test_health() {
    let (app, _) = seeded_app().await;

    let body: Value = AxumTestRequest::get("/health").send(app).await.json();
    assert_eq!(body["status"], "healthy");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (app, _) = seeded_app().await;
    let response = AxumTestRequest::get("/api/unknown").send(app).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_request_id_is_generated_or_propagated() {
    let (app, _) = seeded_app().await;

    let response = AxumTestRequest::get("/api/modules").send(app.clone()).await;
    let generated = response.header("x-request-id").unwrap();
    assert!(generated.starts_with("req_"));

    let response = AxumTestRequest::get("/api/modules")
        .header("x-request-id", "client-supplied-id")
        .send(app)
        .await;
    assert_eq!(
        response.header("x-request-id").as_deref(),
        Some("client-supplied-id")
    );
}

#[tokio::test]
async fn test_cors_mirrors_any_origin_with_credentials() {
    let (app, _) = seeded_app().await;

    let response = AxumTestRequest::get("/api/gestures")
        .header("origin", "https://learn.example.com")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("https://learn.example.com")
    );
    assert_eq!(
        response.header("access-control-allow-credentials").as_deref(),
        Some("true")
    );

    let response = AxumTestRequest::options("/api/progress")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,x-custom")
        .send(app)
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("http://localhost:3000")
    );
    assert_eq!(
        response.header("access-control-allow-methods").as_deref(),
        Some("POST")
    );
    assert_eq!(
        response.header("access-control-allow-headers").as_deref(),
        Some("content-type,x-custom")
    );
}

#[tokio::test]
async fn test_cors_origin_list_is_enforced() {
    let resources = create_test_resources().await;
    let resources = Arc::new(ServerResources::new(
        resources.store.clone(),
        ServerConfig {
            cors_origins: CorsOrigins::List(vec!["https://learn.example.com".to_owned()]),
            ..test_config()
        },
    ));
    let app = build_router(&resources);

    let allowed = AxumTestRequest::get("/")
        .header("origin", "https://learn.example.com")
        .send(app.clone())
        .await;
    assert_eq!(
        allowed.header("access-control-allow-origin").as_deref(),
        Some("https://learn.example.com")
    );

    let denied = AxumTestRequest::get("/")
        .header("origin", "https://evil.example.com")
        .send(app)
        .await;
    assert_eq!(denied.header("access-control-allow-origin"), None);
}
