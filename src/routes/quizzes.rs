// ABOUTME: Route handler for module quizzes
// ABOUTME: Returns every question attached to a module slug
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use crate::resources::ServerResources;
use crate::services::quizzes;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use signify_core::errors::AppError;
use std::sync::Arc;

/// Quiz routes implementation
pub struct QuizRoutes;

impl QuizRoutes {
    /// Create all quiz routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/quizzes/:module_slug", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle GET /api/quizzes/:module_slug
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(module_slug): Path<String>,
    ) -> Result<Response, AppError> {
        let questions = quizzes::get_quiz(&resources.store, &module_slug).await?;
        Ok((StatusCode::OK, Json(questions)).into_response())
    }
}
