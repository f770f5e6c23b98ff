// ABOUTME: Integration tests for favorites, profile, and progress routes
// ABOUTME: Covers idempotent favorites, first-read profile creation, and replace-on-write progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::seeded_app;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use signify_learn::database::Collection;
use signify_learn::models::{CompletedLessons, Favorite, UserProfile, WriteAck};

// ============================================================================
// Favorites
// ============================================================================

#[tokio::test]
async fn test_add_favorite_twice_stores_one_record() {
    let (app, resources) = seeded_app().await;
    let request = json!({"user_email": "budi@example.com", "gesture_slug": "terima-kasih"});

    for _ in 0..2 {
        let ack: WriteAck = AxumTestRequest::post("/api/favorites")
            .json(&request)
            .send(app.clone())
            .await
            .assert_status(StatusCode::OK)
            .json();
        assert!(ack.ok);
    }

    let favorites: Vec<Favorite> = AxumTestRequest::get("/api/favorites?user_email=budi@example.com")
        .send(app)
        .await
        .json();
    assert_eq!(
        favorites,
        [Favorite {
            user_email: "budi@example.com".to_owned(),
            gesture_slug: "terima-kasih".to_owned(),
        }]
    );

    let database = resources.store.database().unwrap();
    assert_eq!(database.count_documents(Collection::Favorite).await.unwrap(), 1);
}

#[tokio::test]
async fn test_email_domain_case_does_not_split_owners() {
    let (app, resources) = seeded_app().await;

    for email in ["Budi@Example.COM", "Budi@example.com"] {
        let ack: WriteAck = AxumTestRequest::post("/api/favorites")
            .json(&json!({"user_email": email, "gesture_slug": "a"}))
            .send(app.clone())
            .await
            .json();
        assert!(ack.ok);
    }

    let favorites: Vec<Favorite> = AxumTestRequest::get("/api/favorites?user_email=Budi@EXAMPLE.com")
        .send(app)
        .await
        .json();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].user_email, "Budi@example.com");

    let database = resources.store.database().unwrap();
    assert_eq!(database.count_documents(Collection::Favorite).await.unwrap(), 1);
}

#[tokio::test]
async fn test_favorites_are_per_user_and_unvalidated() {
    let (app, _) = seeded_app().await;

    for (email, slug) in [
        ("budi@example.com", "a"),
        ("budi@example.com", "not-a-gesture"),
        ("siti@example.com", "b"),
    ] {
        let ack: WriteAck = AxumTestRequest::post("/api/favorites")
            .json(&json!({"user_email": email, "gesture_slug": slug}))
            .send(app.clone())
            .await
            .json();
        assert!(ack.ok);
    }

    let favorites: Vec<Favorite> = AxumTestRequest::get("/api/favorites?user_email=budi@example.com")
        .send(app.clone())
        .await
        .json();
    let slugs: Vec<&str> = favorites.iter().map(|f| f.gesture_slug.as_str()).collect();
    assert_eq!(slugs, ["a", "not-a-gesture"]);

    let favorites: Vec<Favorite> = AxumTestRequest::get("/api/favorites?user_email=nobody@example.com")
        .send(app)
        .await
        .json();
    assert!(favorites.is_empty());
}

#[tokio::test]
async fn test_malformed_email_is_rejected() {
    let (app, _) = seeded_app().await;

    let body: Value = AxumTestRequest::get("/api/favorites?user_email=not-an-email")
        .send(app.clone())
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    let body: Value = AxumTestRequest::get("/api/favorites")
        .send(app.clone())
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    let body: Value = AxumTestRequest::post("/api/favorites")
        .json(&json!({"user_email": "budi@", "gesture_slug": "a"}))
        .send(app.clone())
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .json();
    assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");

    let body: Value = AxumTestRequest::get("/api/profile?email=budi.example.com")
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_unparseable_body_uses_error_envelope() {
    let (app, _) = seeded_app().await;

    let body: Value = AxumTestRequest::post("/api/favorites")
        .header("content-type", "application/json")
        .body("{not json")
        .send(app.clone())
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "INVALID_FORMAT");

    let body: Value = AxumTestRequest::post("/api/progress")
        .body(r#"{"user_email":"budi@example.com","module_slug":"dasar-dasar"}"#)
        .send(app)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();
    assert_eq!(body["error"]["code"], "INVALID_FORMAT");
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn test_first_profile_read_creates_starter_profile() {
    let (app, resources) = seeded_app().await;
    let uri = "/api/profile?email=baru@example.com";

    let first: UserProfile = AxumTestRequest::get(uri)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(first.name, "Pengguna");
    assert_eq!(first.email, "baru@example.com");
    assert_eq!(first.avatar, None);
    assert_eq!((first.points, first.level, first.streak), (120, 2, 5));
    assert_eq!(first.badges, ["Pemula"]);

    let second: UserProfile = AxumTestRequest::get(uri).send(app).await.json();
    assert_eq!(second, first);

    let database = resources.store.database().unwrap();
    assert_eq!(database.count_documents(Collection::User).await.unwrap(), 1);
}

#[tokio::test]
async fn test_profile_returns_stored_values() {
    let (app, resources) = seeded_app().await;
    let database = resources.store.database().unwrap();
    sqlx::query(
        r#"INSERT INTO "user" (name, email, points) VALUES ('Siti', 'siti@example.com', 900)"#,
    )
    .execute(database.pool())
    .await
    .unwrap();

    let profile: UserProfile = AxumTestRequest::get("/api/profile?email=siti@example.com")
        .send(app)
        .await
        .json();
    assert_eq!(profile.name, "Siti");
    assert_eq!(profile.points, 900);
    assert_eq!(profile.level, 1);
    assert_eq!(profile.streak, 0);
    assert!(profile.badges.is_empty());
    assert_eq!(database.count_documents(Collection::User).await.unwrap(), 1);
}

// ============================================================================
// Progress
// ============================================================================

#[tokio::test]
async fn test_progress_defaults_to_empty() {
    let (app, _) = seeded_app().await;

    let body: CompletedLessons =
        AxumTestRequest::get("/api/progress?user_email=budi@example.com&module_slug=dasar-dasar")
            .send(app)
            .await
            .json();
    assert!(body.completed_lessons.is_empty());
}

#[tokio::test]
async fn test_progress_write_replaces_previous_list() {
    let (app, resources) = seeded_app().await;
    let uri = "/api/progress?user_email=budi@example.com&module_slug=dasar-dasar";

    for lessons in [json!([0, 1]), json!([2])] {
        let ack: WriteAck = AxumTestRequest::post("/api/progress")
            .json(&json!({
                "user_email": "budi@example.com",
                "module_slug": "dasar-dasar",
                "completed_lessons": lessons,
            }))
            .send(app.clone())
            .await
            .json();
        assert!(ack.ok);
    }

    let body: CompletedLessons = AxumTestRequest::get(uri).send(app.clone()).await.json();
    assert_eq!(body.completed_lessons, [2]);

    let other: CompletedLessons =
        AxumTestRequest::get("/api/progress?user_email=budi@example.com&module_slug=ekspresi-emosi")
            .send(app)
            .await
            .json();
    assert!(other.completed_lessons.is_empty());

    let database = resources.store.database().unwrap();
    assert_eq!(database.count_documents(Collection::Progress).await.unwrap(), 1);
    let stored = database
        .find_progress("budi@example.com", "dasar-dasar")
        .await
        .unwrap()
        .unwrap();
    assert!(stored.updated_at.is_some());
}

#[tokio::test]
async fn test_progress_keeps_submitted_order_and_defaults_list() {
    let (app, _) = seeded_app().await;
    let uri = "/api/progress?user_email=siti@example.com&module_slug=ekspresi-emosi";

    let ack: WriteAck = AxumTestRequest::post("/api/progress")
        .json(&json!({
            "user_email": "siti@example.com",
            "module_slug": "ekspresi-emosi",
            "completed_lessons": [2, 0, 2],
        }))
        .send(app.clone())
        .await
        .json();
    assert!(ack.ok);
    let body: Value = AxumTestRequest::get(uri).send(app.clone()).await.json();
    assert_eq!(body, json!({"completed_lessons": [2, 0, 2]}));

    let ack: WriteAck = AxumTestRequest::post("/api/progress")
        .json(&json!({"user_email": "siti@example.com", "module_slug": "ekspresi-emosi"}))
        .send(app.clone())
        .await
        .json();
    assert!(ack.ok);
    let body: CompletedLessons = AxumTestRequest::get(uri).send(app).await.json();
    assert!(body.completed_lessons.is_empty());
}

#[tokio::test]
async fn test_negative_lesson_index_is_rejected() {
    let (app, _) = seeded_app().await;

    let response = AxumTestRequest::post("/api/progress")
        .json(&json!({
            "user_email": "budi@example.com",
            "module_slug": "dasar-dasar",
            "completed_lessons": [-1],
        }))
        .send(app)
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    assert!(body["error"]["message"].as_str().unwrap().contains("completed_lessons"));
}
