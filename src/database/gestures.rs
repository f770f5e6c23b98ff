// ABOUTME: Gesture collection operations: filtered paged listing, slug lookup, bulk insert
// ABOUTME: Name search is a case-insensitive substring match; category is an exact match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::{decode_list, encode_list, Database};
use signify_core::errors::{AppError, AppResult};
use signify_core::models::GestureDocument;
use signify_core::pagination::PageRequest;
use sqlx::{sqlite::SqliteRow, Row};

/// Filters for gesture listing, combined with logical AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureFilter {
    /// Case-insensitive substring of the gesture name
    pub name_contains: Option<String>,
    /// Exact category
    pub category: Option<String>,
}

impl GestureFilter {
    /// Build a filter, treating empty strings as "no filter"
    #[must_use]
    pub fn new(query: Option<String>, category: Option<String>) -> Self {
        Self {
            name_contains: query.filter(|q| !q.is_empty()),
            category: category.filter(|c| !c.is_empty()),
        }
    }

    /// LIKE pattern for the name filter, with wildcards in the input escaped
    fn name_pattern(&self) -> Option<String> {
        self.name_contains
            .as_deref()
            .map(|query| format!("%{}%", escape_like(query)))
    }
}

/// Escape `%`, `_` and the escape character itself for a `LIKE ... ESCAPE '\'` pattern
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

impl Database {
    /// Create the gesture collection
    pub(super) async fn migrate_gestures(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS "gesture" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                category TEXT NOT NULL,
                difficulty TEXT,
                thumbnail TEXT,
                video_url TEXT,
                steps TEXT,
                examples TEXT,
                tags TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(r#"CREATE INDEX IF NOT EXISTS idx_gesture_category ON "gesture"(category)"#)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List gestures matching `filter`, one page at a time, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored list is not valid JSON
    pub async fn find_gestures(
        &self,
        filter: &GestureFilter,
        page: PageRequest,
    ) -> AppResult<Vec<GestureDocument>> {
        let rows = sqlx::query(
            r#"
            SELECT name, slug, category, difficulty, thumbnail, video_url, steps, examples, tags
            FROM "gesture"
            WHERE (?1 IS NULL OR name LIKE ?1 ESCAPE '\')
              AND (?2 IS NULL OR category = ?2)
            ORDER BY id
            LIMIT ?3 OFFSET ?4
            "#,
        )
        .bind(filter.name_pattern())
        .bind(filter.category.as_deref())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list gestures: {e}")))?;

        rows.iter().map(row_to_gesture).collect()
    }

    /// Find a gesture by its slug
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn find_gesture_by_slug(&self, slug: &str) -> AppResult<Option<GestureDocument>> {
        let row = sqlx::query(
            r#"
            SELECT name, slug, category, difficulty, thumbnail, video_url, steps, examples, tags
            FROM "gesture"
            WHERE slug = ?1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get gesture: {e}")))?;

        row.map(|r| row_to_gesture(&r)).transpose()
    }

    /// Insert gestures in one transaction, skipping slugs that already exist
    ///
    /// Returns the number of documents actually inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails
    pub async fn insert_gestures(&self, gestures: &[GestureDocument]) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for gesture in gestures {
            let result = sqlx::query(
                r#"
                INSERT INTO "gesture" (
                    name, slug, category, difficulty, thumbnail, video_url, steps, examples, tags
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                ON CONFLICT(slug) DO NOTHING
                "#,
            )
            .bind(&gesture.name)
            .bind(&gesture.slug)
            .bind(&gesture.category)
            .bind(&gesture.difficulty)
            .bind(&gesture.thumbnail)
            .bind(&gesture.video_url)
            .bind(encode_list(gesture.steps.as_deref())?)
            .bind(encode_list(gesture.examples.as_deref())?)
            .bind(encode_list(gesture.tags.as_deref())?)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert gesture: {e}")))?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}

/// Convert a database row to a `GestureDocument`
fn row_to_gesture(row: &SqliteRow) -> AppResult<GestureDocument> {
    Ok(GestureDocument {
        name: row.get("name"),
        slug: row.get("slug"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
        thumbnail: row.get("thumbnail"),
        video_url: row.get("video_url"),
        steps: decode_list(row.get("steps"))?,
        examples: decode_list(row.get("examples"))?,
        tags: decode_list(row.get("tags"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("terima"), "terima");
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn test_filter_ignores_empty_strings() {
        let filter = GestureFilter::new(Some(String::new()), Some(String::new()));
        assert_eq!(filter, GestureFilter::default());
        assert_eq!(filter.name_pattern(), None);

        let filter = GestureFilter::new(Some("kasih".to_owned()), None);
        assert_eq!(filter.name_pattern().as_deref(), Some("%kasih%"));
    }
}
