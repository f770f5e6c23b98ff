// ABOUTME: Quiz question document and response shape
// ABOUTME: Questions reference modules only by slug and carry a 0-based answer index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// A quiz question as stored in the `quizquestion` collection
///
/// `module_slug` is not checked against the `module` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestionDocument {
    /// Slug of the module this question belongs to
    pub module_slug: String,
    /// Question text
    pub prompt: String,
    /// Optional media URL shown with the prompt
    #[serde(default)]
    pub media: Option<String>,
    /// Answer options
    #[serde(default)]
    pub options: Option<Vec<String>>,
    /// 0-based index of the correct option
    #[serde(default)]
    pub answer_index: Option<u32>,
}

impl QuizQuestionDocument {
    /// Check that the question has options and the answer points at one of them
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `options` is empty or `answer_index` is out of bounds
    pub fn validate(&self) -> AppResult<()> {
        let option_count = self.options.as_ref().map_or(0, Vec::len);
        if option_count == 0 {
            return Err(AppError::invalid_input(format!(
                "quiz question for '{}' has no options",
                self.module_slug
            )));
        }
        let answer_index = self.answer_index.unwrap_or(0) as usize;
        if answer_index >= option_count {
            return Err(AppError::invalid_input(format!(
                "answer_index {answer_index} is out of bounds for {option_count} options"
            )));
        }
        Ok(())
    }
}

/// Quiz question returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Slug of the module this question belongs to
    pub module_slug: String,
    /// Question text
    pub prompt: String,
    /// Optional media URL
    pub media: Option<String>,
    /// Answer options
    pub options: Vec<String>,
    /// 0-based index of the correct option
    pub answer_index: u32,
}

impl From<QuizQuestionDocument> for QuizQuestion {
    fn from(doc: QuizQuestionDocument) -> Self {
        Self {
            module_slug: doc.module_slug,
            prompt: doc.prompt,
            media: doc.media,
            options: doc.options.unwrap_or_default(),
            answer_index: doc.answer_index.unwrap_or(0),
        }
    }
}
