// ABOUTME: Domain service layer between the HTTP routes and the document store
// ABOUTME: Applies response projections and folds store failures into degraded results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

//! Domain service layer
//!
//! Every public operation runs its store work through [`with_store`]. A
//! missing store or a failed query never reaches the client as a 5xx; instead
//! each operation supplies the degraded value it returns in that case:
//!
//! | Operation kind | Degraded result |
//! |---|---|
//! | list read | empty list |
//! | keyed read | `404 Not found` |
//! | write | `{"ok": false}` |
//! | progress read | `{"completed_lessons": []}` |
//!
//! Other errors (not-found, validation) pass through unchanged.

/// `/test` and `/health` status reports
pub mod diagnostics;
/// Per-user gesture favorites
pub mod favorites;
/// Gesture listing and lookup
pub mod gestures;
/// Learning module listing and lookup
pub mod modules;
/// User profiles with first-read creation
pub mod profiles;
/// Lesson progress reads and replacements
pub mod progress;
/// Quiz questions by module
pub mod quizzes;

use crate::database::{Database, Store};
use signify_core::errors::AppResult;
use std::future::Future;
use tracing::warn;

/// Run `query` against the store, substituting `fallback` on store failure
///
/// # Errors
///
/// Returns the query's error when it is not a store failure, or whatever
/// `fallback` returns
pub(crate) async fn with_store<'a, T, Q, Fut, D>(
    store: &'a Store,
    operation: &'static str,
    query: Q,
    fallback: D,
) -> AppResult<T>
where
    Q: FnOnce(&'a Database) -> Fut,
    Fut: Future<Output = AppResult<T>>,
    D: FnOnce() -> AppResult<T>,
{
    let result = match store.database() {
        Ok(database) => query(database).await,
        Err(e) => Err(e),
    };

    match result {
        Err(e) if e.is_store_failure() => {
            warn!(
                operation,
                error.code = ?e.code,
                error.message = %e.message,
                "Document store unavailable, returning degraded result"
            );
            fallback()
        }
        other => other,
    }
}
