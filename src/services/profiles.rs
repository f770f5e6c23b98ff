// ABOUTME: Profile service: lookup by email, creating a starter profile on first read
// ABOUTME: The first-read write is intentional so new learners see populated stats immediately
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::with_store;
use crate::database::{Database, Store};
use signify_core::errors::{AppError, AppResult};
use signify_core::models::{UserDocument, UserProfile};
use signify_core::EmailAddress;
use tracing::info;

/// Profile for `email`
///
/// An unknown email gets a starter profile persisted before it is returned,
/// so `GET /api/profile` can write. Repeated reads return the stored values.
///
/// # Errors
///
/// Returns `ResourceNotFound` ("Not found") when the store is unavailable
pub async fn get_profile(store: &Store, email: &EmailAddress) -> AppResult<UserProfile> {
    with_store(
        store,
        "get_profile",
        |db| load_or_create(db, email.as_str()),
        || Err(AppError::not_found("Not found")),
    )
    .await
    .map(UserProfile::from)
}

async fn load_or_create(db: &Database, email: &str) -> AppResult<UserDocument> {
    if let Some(user) = db.find_user(email).await? {
        return Ok(user);
    }

    // Deliberate read-side write: unknown emails get a starter profile.
    // The unique email key makes concurrent first reads converge on one row.
    if db.insert_user_if_absent(&UserDocument::starter(email)).await? {
        info!(user.email = %email, "Created starter profile on first read");
    }

    db.find_user(email)
        .await?
        .ok_or_else(|| AppError::internal(format!("Profile for {email} missing after creation")))
}
