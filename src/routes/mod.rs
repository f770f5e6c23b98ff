// ABOUTME: Route module organization for the SignifyLearn HTTP endpoints
// ABOUTME: Groups route definitions by domain and merges them into one router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

//! Route module for the SignifyLearn API
//!
//! Each domain module holds route definitions and thin handlers that
//! delegate to the service layer.

/// Extractors with JSON error rejections
pub mod extract;
/// Favorite gesture routes
pub mod favorites;
/// Gesture catalogue routes
pub mod gestures;
/// Root, diagnostic, and health routes
pub mod health;
/// Learning module routes
pub mod modules;
/// User profile routes
pub mod profile;
/// Lesson progress routes
pub mod progress;
/// Quiz routes
pub mod quizzes;

pub use favorites::FavoriteRoutes;
pub use gestures::GestureRoutes;
pub use health::HealthRoutes;
pub use modules::ModuleRoutes;
pub use profile::ProfileRoutes;
pub use progress::ProgressRoutes;
pub use quizzes::QuizRoutes;

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;

/// Every API route, without middleware
pub fn api_routes(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(GestureRoutes::routes(Arc::clone(resources)))
        .merge(ModuleRoutes::routes(Arc::clone(resources)))
        .merge(QuizRoutes::routes(Arc::clone(resources)))
        .merge(FavoriteRoutes::routes(Arc::clone(resources)))
        .merge(ProfileRoutes::routes(Arc::clone(resources)))
        .merge(ProgressRoutes::routes(Arc::clone(resources)))
}
