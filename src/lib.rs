// ABOUTME: Main library entry point for the SignifyLearn API
// ABOUTME: Serves sign-language gestures, learning modules, quizzes, favorites, profiles, and progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

#![deny(unsafe_code)]

//! # SignifyLearn API
//!
//! An HTTP/JSON service for a sign-language learning app. It reads the
//! gesture catalogue, learning modules, and quizzes, and stores per-user
//! favorites, profiles, and lesson progress in a SQLite-backed document
//! store.
//!
//! ## Architecture
//!
//! - **routes**: axum handlers, one module per resource
//! - **services**: projections and the degrade rules for an unavailable store
//! - **database**: one table per collection, migrations, and typed queries
//! - **seed**: sample content inserted into empty collections
//! - **config** / **logging**: environment-driven settings and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use signify_learn::config::ServerConfig;
//! use signify_learn::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::connect(config).await);
//!     signify_learn::seed::seed_if_empty(&resources.store).await?;
//!     signify_learn::server::serve(resources).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Shared constants
pub mod constants;

/// SQLite-backed document store
pub mod database;

/// Structured logging setup
pub mod logging;

/// CORS and request tracing middleware
pub mod middleware;

/// Shared handler state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Sample data initializer
pub mod seed;

/// Router assembly and HTTP serving
pub mod server;

/// Domain services
pub mod services;

pub use signify_core::{errors, models, pagination, EmailAddress};
