// ABOUTME: Favorite service: per-user listing and idempotent add
// ABOUTME: Gesture slugs are saved as given, without checking the gesture collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::with_store;
use crate::database::Store;
use signify_core::errors::{AppError, AppResult};
use signify_core::models::{Favorite, WriteAck};
use signify_core::EmailAddress;
use tracing::{debug, info};

/// Every favorite saved by `user_email`
///
/// # Errors
///
/// Never fails on store errors; an unavailable store yields an empty list
pub async fn list_favorites(store: &Store, user_email: &EmailAddress) -> AppResult<Vec<Favorite>> {
    with_store(
        store,
        "list_favorites",
        |db| db.find_favorites(user_email.as_str()),
        || Ok(Vec::new()),
    )
    .await
}

/// Save `gesture_slug` as a favorite of `user_email`
///
/// Adding an existing pair changes nothing and still reports success.
///
/// # Errors
///
/// Never fails on store errors; an unavailable store yields `{"ok": false}`
pub async fn add_favorite(
    store: &Store,
    user_email: &EmailAddress,
    gesture_slug: &str,
) -> AppResult<WriteAck> {
    let favorite = Favorite {
        user_email: user_email.as_str().to_owned(),
        gesture_slug: gesture_slug.to_owned(),
    };

    with_store(
        store,
        "add_favorite",
        |db| async move {
            if db.insert_favorite(&favorite).await? {
                info!(
                    user.email = %favorite.user_email,
                    gesture.slug = %favorite.gesture_slug,
                    "Favorite added"
                );
            } else {
                debug!(
                    user.email = %favorite.user_email,
                    gesture.slug = %favorite.gesture_slug,
                    "Favorite already saved"
                );
            }
            Ok::<_, AppError>(WriteAck::applied())
        },
        || Ok(WriteAck::failed()),
    )
    .await
}
