// ABOUTME: Diagnostic reports for the root, /test and /health endpoints
// ABOUTME: Reports store connectivity without ever failing the request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use crate::config::ServerConfig;
use crate::constants::{diagnostics, service_names};
use crate::database::Store;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootMessage {
    /// Liveness message
    pub message: String,
}

impl Default for RootMessage {
    fn default() -> Self {
        Self {
            message: service_names::ROOT_MESSAGE.to_owned(),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `healthy` while the process serves requests
    pub status: String,
    /// RFC 3339 time of the check
    pub timestamp: String,
}

impl HealthStatus {
    /// Status as of now
    #[must_use]
    pub fn now() -> Self {
        Self {
            status: "healthy".to_owned(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Body of `GET /test`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionReport {
    /// Backend status
    pub backend: String,
    /// Store status
    pub database: String,
    /// Whether `DATABASE_URL` was set, when a store is attached
    pub database_url: Option<String>,
    /// Store name, when a store is attached
    pub database_name: Option<String>,
    /// `Connected` or `Not Connected`
    pub connection_status: String,
    /// Up to ten collection names
    pub collections: Vec<String>,
}

/// Build the `/test` report
pub async fn connection_report(store: &Store, config: &ServerConfig) -> ConnectionReport {
    let mut report = ConnectionReport {
        backend: diagnostics::BACKEND_RUNNING.to_owned(),
        database: diagnostics::DATABASE_NOT_INITIALIZED.to_owned(),
        database_url: None,
        database_name: None,
        connection_status: diagnostics::NOT_CONNECTED.to_owned(),
        collections: Vec::new(),
    };

    let Ok(database) = store.database() else {
        return report;
    };

    report.database_url = Some(
        if config.database_url_set {
            diagnostics::URL_SET
        } else {
            diagnostics::URL_NOT_SET
        }
        .to_owned(),
    );
    report.database_name = Some(config.database_name.clone());
    report.connection_status = diagnostics::CONNECTED.to_owned();

    match database.list_collection_names().await {
        Ok(mut names) => {
            names.truncate(diagnostics::MAX_COLLECTIONS);
            report.collections = names;
            report.database = diagnostics::DATABASE_WORKING.to_owned();
        }
        Err(e) => {
            warn!(error.message = %e.message, "Failed to list collections for /test");
            report.database = format!(
                "{}{}",
                diagnostics::DATABASE_ERROR_PREFIX,
                truncate_chars(&e.message, diagnostics::MAX_ERROR_CHARS)
            );
        }
    }

    report
}

/// First `max` characters of `text`
fn truncate_chars(text: &str, max: usize) -> &str {
    text.char_indices()
        .nth(max)
        .map_or(text, |(end, _)| &text[..end])
}
