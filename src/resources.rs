// ABOUTME: Shared server resources handed to every route
// ABOUTME: Bundles the document store handle with the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use crate::config::ServerConfig;
use crate::database::{Database, Store};
use std::sync::Arc;
use tracing::{error, info};

/// Resources shared by all request handlers
///
/// Created once at startup and shared as `Arc<ServerResources>` router state.
#[derive(Clone)]
pub struct ServerResources {
    /// Document store handle, possibly disconnected
    pub store: Store,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle an existing store with configuration
    #[must_use]
    pub fn new(store: Store, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Open the configured store, continuing without one if it cannot be opened
    pub async fn connect(config: ServerConfig) -> Self {
        let store = match Database::new(&config.database_url).await {
            Ok(database) => {
                info!(database.name = %config.database_name, "Connected to document store");
                Store::connected(database)
            }
            Err(e) => {
                error!(
                    error.code = ?e.code,
                    error.message = %e.message,
                    "Document store unavailable, serving degraded responses"
                );
                Store::disconnected()
            }
        };

        Self::new(store, config)
    }
}
