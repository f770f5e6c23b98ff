// ABOUTME: Gesture service: filtered paged listing and single-gesture lookup
// ABOUTME: Projects stored documents into summary and detail shapes with defaults applied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::with_store;
use crate::database::{GestureFilter, Store};
use signify_core::errors::{AppError, AppResult};
use signify_core::models::{GestureDetail, GestureSummary};
use signify_core::pagination::PageRequest;

/// Page of gestures matching `filter`, in collection order
///
/// An unavailable store yields an empty page.
///
/// # Errors
///
/// Returns an error only if a stored document cannot be decoded
pub async fn list_gestures(
    store: &Store,
    filter: &GestureFilter,
    page: PageRequest,
) -> AppResult<Vec<GestureSummary>> {
    let documents = with_store(
        store,
        "list_gestures",
        |db| db.find_gestures(filter, page),
        || Ok(Vec::new()),
    )
    .await?;

    Ok(documents.into_iter().map(GestureSummary::from).collect())
}

/// Full gesture by slug
///
/// # Errors
///
/// Returns `ResourceNotFound` ("Gesture not found") for an unknown slug, or
/// ("Not found") when the store is unavailable
pub async fn get_gesture(store: &Store, slug: &str) -> AppResult<GestureDetail> {
    with_store(
        store,
        "get_gesture",
        |db| db.find_gesture_by_slug(slug),
        || Err(AppError::not_found("Not found")),
    )
    .await?
    .map(GestureDetail::from)
    .ok_or_else(|| AppError::not_found("Gesture not found"))
}
