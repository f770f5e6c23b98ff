// ABOUTME: User collection operations: lookup by email and insert-if-absent
// ABOUTME: Insert-if-absent relies on the unique email key so racing first reads create one row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::{decode_list, encode_list, Database};
use signify_core::errors::{AppError, AppResult};
use signify_core::models::UserDocument;
use sqlx::Row;

impl Database {
    /// Create the user collection
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS "user" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                email TEXT NOT NULL UNIQUE,
                avatar TEXT,
                points INTEGER,
                level INTEGER,
                streak INTEGER,
                badges TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Find a user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn find_user(&self, email: &str) -> AppResult<Option<UserDocument>> {
        let row = sqlx::query(
            r#"
            SELECT name, email, avatar, points, level, streak, badges
            FROM "user"
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        row.map(|row| {
            Ok(UserDocument {
                name: row.get("name"),
                email: row.get("email"),
                avatar: row.get("avatar"),
                points: row.get("points"),
                level: row.get("level"),
                streak: row.get("streak"),
                badges: decode_list(row.get("badges"))?,
            })
        })
        .transpose()
    }

    /// Insert `user` unless a user with the same email exists
    ///
    /// Returns `true` if the row was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn insert_user_if_absent(&self, user: &UserDocument) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO "user" (name, email, avatar, points, level, streak, badges)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(email) DO NOTHING
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.avatar)
        .bind(user.points)
        .bind(user.level)
        .bind(user.streak)
        .bind(encode_list(user.badges.as_deref())?)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create user: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}
