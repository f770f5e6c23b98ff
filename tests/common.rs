// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds in-memory, seeded, and disconnected server resources plus the full router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `signify_learn`

use axum::Router;
use signify_learn::{
    config::ServerConfig,
    database::{Database, Store},
    resources::ServerResources,
    seed, server,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration matching an in-memory store
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: "sqlite::memory:".to_owned(),
        database_url_set: true,
        database_name: "memory".to_owned(),
        seed_on_startup: false,
        ..ServerConfig::default()
    }
}

/// Empty in-memory store
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new("sqlite::memory:").await.unwrap()
}

/// Resources backed by an empty in-memory store
pub async fn create_test_resources() -> Arc<ServerResources> {
    let store = Store::connected(create_test_database().await);
    Arc::new(ServerResources::new(store, test_config()))
}

/// Resources backed by an in-memory store holding the sample data
pub async fn create_seeded_resources() -> Arc<ServerResources> {
    let resources = create_test_resources().await;
    let report = seed::seed_if_empty(&resources.store).await.unwrap();
    assert_eq!(report.total(), 6);
    resources
}

/// Resources with no store attached
pub fn create_disconnected_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(Store::disconnected(), test_config()))
}

/// Full router, with middleware, over a seeded in-memory store
pub async fn seeded_app() -> (Router, Arc<ServerResources>) {
    let resources = create_seeded_resources().await;
    (server::build_router(&resources), resources)
}
