// ABOUTME: Route handlers for learning modules
// ABOUTME: Module listing without lessons and module detail with ordered lessons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use crate::resources::ServerResources;
use crate::services::modules;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use signify_core::errors::AppError;
use std::sync::Arc;

/// Module routes implementation
pub struct ModuleRoutes;

impl ModuleRoutes {
    /// Create all module routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/modules", get(Self::handle_list))
            .route("/api/modules/:slug", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle GET /api/modules
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let modules = modules::list_modules(&resources.store).await?;
        Ok((StatusCode::OK, Json(modules)).into_response())
    }

    /// Handle GET /api/modules/:slug
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(slug): Path<String>,
    ) -> Result<Response, AppError> {
        let module = modules::get_module(&resources.store, &slug).await?;
        Ok((StatusCode::OK, Json(module)).into_response())
    }
}
