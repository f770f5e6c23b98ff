// ABOUTME: Quiz service returning the questions attached to a module slug
// ABOUTME: Matching is exact; an unknown slug or unavailable store yields no questions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::with_store;
use crate::database::Store;
use signify_core::errors::AppResult;
use signify_core::models::QuizQuestion;

/// Questions whose `module_slug` equals `module_slug`, in collection order
///
/// # Errors
///
/// Returns an error only if a stored question cannot be decoded
pub async fn get_quiz(store: &Store, module_slug: &str) -> AppResult<Vec<QuizQuestion>> {
    let documents = with_store(
        store,
        "get_quiz",
        |db| db.find_quiz_questions(module_slug),
        || Ok(Vec::new()),
    )
    .await?;

    Ok(documents.into_iter().map(QuizQuestion::from).collect())
}
