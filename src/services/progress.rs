// ABOUTME: Progress service: completed-lesson reads and whole-list replacement
// ABOUTME: Writes are last-writer-wins; lists are never merged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::with_store;
use crate::database::Store;
use signify_core::errors::{AppError, AppResult};
use signify_core::models::{CompletedLessons, ProgressDocument, WriteAck};
use signify_core::EmailAddress;
use tracing::debug;

/// Completed lessons for one user and module
///
/// A missing record or an unavailable store reads as no completed lessons.
///
/// # Errors
///
/// Returns an error only if the stored record cannot be decoded
pub async fn get_progress(
    store: &Store,
    user_email: &EmailAddress,
    module_slug: &str,
) -> AppResult<CompletedLessons> {
    with_store(
        store,
        "get_progress",
        |db| db.find_progress(user_email.as_str(), module_slug),
        || Ok(None),
    )
    .await
    .map(CompletedLessons::from)
}

/// Replace the completed lessons for one user and module
///
/// # Errors
///
/// Never fails on store errors; an unavailable store yields `{"ok": false}`
pub async fn set_progress(
    store: &Store,
    user_email: &EmailAddress,
    module_slug: &str,
    completed_lessons: Vec<u32>,
) -> AppResult<WriteAck> {
    let progress = ProgressDocument {
        user_email: user_email.as_str().to_owned(),
        module_slug: module_slug.to_owned(),
        completed_lessons: Some(completed_lessons),
        updated_at: None,
    };

    with_store(
        store,
        "set_progress",
        |db| async move {
            db.upsert_progress(&progress).await?;
            debug!(
                user.email = %progress.user_email,
                module.slug = %progress.module_slug,
                lessons = progress.completed_lessons.as_ref().map_or(0, Vec::len),
                "Progress saved"
            );
            Ok::<_, AppError>(WriteAck::applied())
        },
        || Ok(WriteAck::failed()),
    )
    .await
}
