// ABOUTME: Route handlers for user favorites
// ABOUTME: Lists a user's saved gestures and adds new ones idempotently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::extract::{ApiJson, ApiQuery};
use crate::resources::ServerResources;
use crate::services::favorites;
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

/// Query parameters for listing favorites
#[derive(Debug, Deserialize)]
pub struct ListFavoritesQuery {
    /// Owner email
    pub user_email: EmailAddress,
}

/// Body for adding a favorite
#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    /// Owner email
    pub user_email: EmailAddress,
    /// Gesture to save
    pub gesture_slug: String,
}

/// Favorite routes implementation
pub struct FavoriteRoutes;

impl FavoriteRoutes {
    /// Create all favorite routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/favorites",
                get(Self::handle_list).post(Self::handle_add),
            )
            .with_state(resources)
    }

    /// Handle GET /api/favorites
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        ApiQuery(query): ApiQuery<ListFavoritesQuery>,
    ) -> Result<Response, AppError> {
        let favorites = favorites::list_favorites(&resources.store, &query.user_email).await?;
        Ok((StatusCode::OK, Json(favorites)).into_response())
    }

    /// Handle POST /api/favorites
    async fn handle_add(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(body): ApiJson<AddFavoriteRequest>,
    ) -> Result<Response, AppError> {
        let ack =
            favorites::add_favorite(&resources.store, &body.user_email, &body.gesture_slug).await?;
        Ok((StatusCode::OK, Json(ack)).into_response())
    }
}
