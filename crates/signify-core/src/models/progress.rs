// ABOUTME: Progress document and the completed-lessons response shape
// ABOUTME: One record per (user_email, module_slug); writes replace the whole lesson list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A progress record as stored in the `progress` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressDocument {
    /// Learner email
    pub user_email: String,
    /// Module slug the lessons belong to
    pub module_slug: String,
    /// Indices into the module's `lessons`, in the order submitted
    #[serde(default)]
    pub completed_lessons: Option<Vec<u32>>,
    /// Time of the last write
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Response for progress reads
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompletedLessons {
    /// Completed lesson indices
    pub completed_lessons: Vec<u32>,
}

impl CompletedLessons {
    /// No lessons completed
    #[must_use]
    pub const fn none() -> Self {
        Self {
            completed_lessons: Vec::new(),
        }
    }
}

impl From<ProgressDocument> for CompletedLessons {
    fn from(doc: ProgressDocument) -> Self {
        Self {
            completed_lessons: doc.completed_lessons.unwrap_or_default(),
        }
    }
}

impl From<Option<ProgressDocument>> for CompletedLessons {
    fn from(doc: Option<ProgressDocument>) -> Self {
        doc.map_or_else(Self::none, Self::from)
    }
}
