// ABOUTME: Route handlers for lesson progress
// ABOUTME: Reads completed lessons and replaces them wholesale on submit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::extract::{ApiJson, ApiQuery};
use crate::resources::ServerResources;
use crate::services::progress;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use signify_core::errors::AppError;
use signify_core::EmailAddress;
use std::sync::Arc;

/// Query parameters for reading progress
#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    /// Learner email
    pub user_email: EmailAddress,
    /// Module slug
    pub module_slug: String,
}

/// Body for saving progress
#[derive(Debug, Deserialize)]
pub struct SaveProgressRequest {
    /// Learner email
    pub user_email: EmailAddress,
    /// Module slug
    pub module_slug: String,
    /// Completed lesson indices; replaces whatever was stored
    #[serde(default)]
    pub completed_lessons: Vec<u32>,
}

/// Progress routes implementation
pub struct ProgressRoutes;

impl ProgressRoutes {
    /// Create all progress routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/progress",
                get(Self::handle_get).post(Self::handle_save),
            )
            .with_state(resources)
    }

    /// Handle GET /api/progress
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        ApiQuery(query): ApiQuery<ProgressQuery>,
    ) -> Result<Response, AppError> {
        let lessons =
            progress::get_progress(&resources.store, &query.user_email, &query.module_slug).await?;
        Ok((StatusCode::OK, Json(lessons)).into_response())
    }

    /// Handle POST /api/progress
    async fn handle_save(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(body): ApiJson<SaveProgressRequest>,
    ) -> Result<Response, AppError> {
        let ack = progress::set_progress(
            &resources.store,
            &body.user_email,
            &body.module_slug,
            body.completed_lessons,
        )
        .await?;
        Ok((StatusCode::OK, Json(ack)).into_response())
    }
}
