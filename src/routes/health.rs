// ABOUTME: Root, diagnostic, and health check route handlers
// ABOUTME: Liveness message, store connectivity report, and load-balancer health endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

//! Service status routes
//!
//! `/` and `/test` answer both GET and HEAD. None of these endpoints fail
//! when the document store is unavailable.

use crate::resources::ServerResources;
use crate::services::diagnostics::{self, HealthStatus, RootMessage};
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Status routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all status routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_root))
            .route("/test", get(Self::handle_test))
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    /// Handle GET|HEAD / - liveness message
    async fn handle_root() -> Json<RootMessage> {
        Json(RootMessage::default())
    }

    /// Handle GET|HEAD /test - store connectivity report
    async fn handle_test(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<diagnostics::ConnectionReport> {
        Json(diagnostics::connection_report(&resources.store, &resources.config).await)
    }

    /// Handle GET /health
    async fn handle_health() -> Json<HealthStatus> {
        Json(HealthStatus::now())
    }
}
