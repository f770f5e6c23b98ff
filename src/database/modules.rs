// ABOUTME: Module collection operations: listing, slug lookup, bulk insert
// ABOUTME: Lessons are stored as an ordered JSON array so progress indices stay stable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::{decode_list, encode_list, Database};
use signify_core::errors::{AppError, AppResult};
use signify_core::models::ModuleDocument;
use sqlx::{sqlite::SqliteRow, Row};

impl Database {
    /// Create the module collection
    pub(super) async fn migrate_modules(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS "module" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                summary TEXT,
                cover TEXT,
                lessons TEXT,
                difficulty TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All modules in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn find_modules(&self) -> AppResult<Vec<ModuleDocument>> {
        let rows = sqlx::query(
            r#"
            SELECT title, slug, summary, cover, lessons, difficulty
            FROM "module"
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list modules: {e}")))?;

        rows.iter().map(row_to_module).collect()
    }

    /// Find a module by its slug
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn find_module_by_slug(&self, slug: &str) -> AppResult<Option<ModuleDocument>> {
        let row = sqlx::query(
            r#"
            SELECT title, slug, summary, cover, lessons, difficulty
            FROM "module"
            WHERE slug = ?1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get module: {e}")))?;

        row.map(|r| row_to_module(&r)).transpose()
    }

    /// Insert modules in one transaction, skipping slugs that already exist
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails
    pub async fn insert_modules(&self, modules: &[ModuleDocument]) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for module in modules {
            let result = sqlx::query(
                r#"
                INSERT INTO "module" (title, slug, summary, cover, lessons, difficulty)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ON CONFLICT(slug) DO NOTHING
                "#,
            )
            .bind(&module.title)
            .bind(&module.slug)
            .bind(&module.summary)
            .bind(&module.cover)
            .bind(encode_list(module.lessons.as_deref())?)
            .bind(&module.difficulty)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert module: {e}")))?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}

fn row_to_module(row: &SqliteRow) -> AppResult<ModuleDocument> {
    Ok(ModuleDocument {
        title: row.get("title"),
        slug: row.get("slug"),
        summary: row.get("summary"),
        cover: row.get("cover"),
        lessons: decode_list(row.get("lessons"))?,
        difficulty: row.get("difficulty"),
    })
}
