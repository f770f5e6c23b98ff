// ABOUTME: Favorite collection operations: per-user listing and idempotent add
// ABOUTME: The (user_email, gesture_slug) pair is unique, so concurrent adds cannot duplicate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::Database;
use chrono::Utc;
use signify_core::errors::{AppError, AppResult};
use signify_core::models::Favorite;
use sqlx::Row;

impl Database {
    /// Create the favorite collection
    pub(super) async fn migrate_favorites(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS "favorite" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_email TEXT NOT NULL,
                gesture_slug TEXT NOT NULL,
                created_at TEXT NOT NULL,
                UNIQUE(user_email, gesture_slug)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All favorites saved by `user_email`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn find_favorites(&self, user_email: &str) -> AppResult<Vec<Favorite>> {
        let rows = sqlx::query(
            r#"
            SELECT user_email, gesture_slug
            FROM "favorite"
            WHERE user_email = ?1
            ORDER BY id
            "#,
        )
        .bind(user_email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list favorites: {e}")))?;

        Ok(rows
            .iter()
            .map(|row| Favorite {
                user_email: row.get("user_email"),
                gesture_slug: row.get("gesture_slug"),
            })
            .collect())
    }

    /// Save a favorite unless the identical pair already exists
    ///
    /// Returns `true` if a new row was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn insert_favorite(&self, favorite: &Favorite) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO "favorite" (user_email, gesture_slug, created_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(user_email, gesture_slug) DO NOTHING
            "#,
        )
        .bind(&favorite.user_email)
        .bind(&favorite.gesture_slug)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to add favorite: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}
