// ABOUTME: Quiz question collection operations keyed by module slug
// ABOUTME: Questions are validated on insert so answer_index always points at an option
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::{decode_list, decode_non_negative, encode_list, Database};
use signify_core::errors::{AppError, AppResult};
use signify_core::models::QuizQuestionDocument;
use sqlx::{sqlite::SqliteRow, Row};

impl Database {
    /// Create the quiz question collection
    pub(super) async fn migrate_quiz_questions(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS "quizquestion" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                module_slug TEXT NOT NULL,
                prompt TEXT NOT NULL,
                media TEXT,
                options TEXT,
                answer_index INTEGER CHECK (answer_index IS NULL OR answer_index >= 0)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"CREATE INDEX IF NOT EXISTS idx_quizquestion_module ON "quizquestion"(module_slug)"#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Questions whose `module_slug` equals `module_slug` exactly, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn find_quiz_questions(
        &self,
        module_slug: &str,
    ) -> AppResult<Vec<QuizQuestionDocument>> {
        let rows = sqlx::query(
            r#"
            SELECT module_slug, prompt, media, options, answer_index
            FROM "quizquestion"
            WHERE module_slug = ?1
            ORDER BY id
            "#,
        )
        .bind(module_slug)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list quiz questions: {e}")))?;

        rows.iter().map(row_to_question).collect()
    }

    /// Insert quiz questions in one transaction
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any question fails validation (nothing is
    /// inserted), or a database error if the transaction fails
    pub async fn insert_quiz_questions(&self, questions: &[QuizQuestionDocument]) -> AppResult<u64> {
        for question in questions {
            question.validate()?;
        }

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for question in questions {
            let result = sqlx::query(
                r#"
                INSERT INTO "quizquestion" (module_slug, prompt, media, options, answer_index)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(&question.module_slug)
            .bind(&question.prompt)
            .bind(&question.media)
            .bind(encode_list(question.options.as_deref())?)
            .bind(question.answer_index.map(i64::from))
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert quiz question: {e}")))?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}

fn row_to_question(row: &SqliteRow) -> AppResult<QuizQuestionDocument> {
    Ok(QuizQuestionDocument {
        module_slug: row.get("module_slug"),
        prompt: row.get("prompt"),
        media: row.get("media"),
        options: decode_list(row.get("options"))?,
        answer_index: decode_non_negative(row.get("answer_index"), "answer_index")?,
    })
}
