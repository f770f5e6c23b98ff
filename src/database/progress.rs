// ABOUTME: Progress collection operations: keyed read and whole-list upsert
// ABOUTME: One row per (user_email, module_slug); every write replaces completed_lessons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::{decode_list, encode_list, Database};
use chrono::{DateTime, Utc};
use signify_core::errors::{AppError, AppResult};
use signify_core::models::ProgressDocument;
use sqlx::Row;

impl Database {
    /// Create the progress collection
    pub(super) async fn migrate_progress(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS "progress" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_email TEXT NOT NULL,
                module_slug TEXT NOT NULL,
                completed_lessons TEXT,
                updated_at TEXT,
                UNIQUE(user_email, module_slug)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Progress record for one user and module
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored value cannot be decoded
    pub async fn find_progress(
        &self,
        user_email: &str,
        module_slug: &str,
    ) -> AppResult<Option<ProgressDocument>> {
        let row = sqlx::query(
            r#"
            SELECT user_email, module_slug, completed_lessons, updated_at
            FROM "progress"
            WHERE user_email = ?1 AND module_slug = ?2
            "#,
        )
        .bind(user_email)
        .bind(module_slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get progress: {e}")))?;

        row.map(|row| {
            let updated_at: Option<String> = row.get("updated_at");
            Ok(ProgressDocument {
                user_email: row.get("user_email"),
                module_slug: row.get("module_slug"),
                completed_lessons: decode_list(row.get("completed_lessons"))?,
                updated_at: updated_at.as_deref().map(parse_timestamp).transpose()?,
            })
        })
        .transpose()
    }

    /// Create or replace the progress record for the document's key
    ///
    /// `updated_at` is stamped with the current time regardless of the
    /// document's value.
    ///
    /// # Errors
    ///
    /// Returns an error if the upsert fails
    pub async fn upsert_progress(&self, progress: &ProgressDocument) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO "progress" (user_email, module_slug, completed_lessons, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(user_email, module_slug) DO UPDATE SET
                completed_lessons = excluded.completed_lessons,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&progress.user_email)
        .bind(&progress.module_slug)
        .bind(encode_list(progress.completed_lessons.as_deref())?)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save progress: {e}")))?;

        Ok(())
    }
}

fn parse_timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| AppError::internal(format!("Invalid updated_at '{raw}': {e}")))
}
