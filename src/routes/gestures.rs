// ABOUTME: Route handlers for the gesture catalogue
// ABOUTME: Paged, filterable listing and lookup by slug
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use crate::database::GestureFilter;
use super::extract::ApiQuery;
use crate::resources::ServerResources;
use crate::services::gestures;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use signify_core::errors::AppError;
use signify_core::pagination::PageRequest;
use std::sync::Arc;

/// Query parameters for listing gestures
#[derive(Debug, Default, Deserialize)]
pub struct ListGesturesQuery {
    /// Case-insensitive substring of the name
    pub q: Option<String>,
    /// Exact category
    pub category: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<u32>,
    /// Items per page (default 20, max 100)
    pub page_size: Option<u32>,
}

/// Gesture routes implementation
pub struct GestureRoutes;

impl GestureRoutes {
    /// Create all gesture routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/gestures", get(Self::handle_list))
            .route("/api/gestures/:slug", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle GET /api/gestures
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        ApiQuery(query): ApiQuery<ListGesturesQuery>,
    ) -> Result<Response, AppError> {
        let page = PageRequest::from_query(query.page, query.page_size)?;
        let filter = GestureFilter::new(query.q, query.category);

        let gestures = gestures::list_gestures(&resources.store, &filter, page).await?;

        Ok((StatusCode::OK, Json(gestures)).into_response())
    }

    /// Handle GET /api/gestures/:slug
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(slug): Path<String>,
    ) -> Result<Response, AppError> {
        let gesture = gestures::get_gesture(&resources.store, &slug).await?;

        Ok((StatusCode::OK, Json(gesture)).into_response())
    }
}
