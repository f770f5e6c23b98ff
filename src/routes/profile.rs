// ABOUTME: Route handler for user profiles
// ABOUTME: Fetching an unknown email creates its starter profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::extract::ApiQuery;
use crate::resources::ServerResources;
use crate::services::profiles;
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

/// Query parameters for fetching a profile
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    /// Profile email
    pub email: EmailAddress,
}

/// Profile routes implementation
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/profile", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle GET /api/profile
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        ApiQuery(query): ApiQuery<ProfileQuery>,
    ) -> Result<Response, AppError> {
        let profile = profiles::get_profile(&resources.store, &query.email).await?;
        Ok((StatusCode::OK, Json(profile)).into_response())
    }
}
