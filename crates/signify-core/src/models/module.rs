// ABOUTME: Learning module document and its summary/detail response shapes
// ABOUTME: Lessons are ordered heading strings whose indices are referenced by progress records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use serde::{Deserialize, Serialize};

use super::gesture::Difficulty;

/// A learning module as stored in the `module` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDocument {
    /// Display title
    pub title: String,
    /// Unique URL-safe identifier
    pub slug: String,
    /// Short description
    #[serde(default)]
    pub summary: Option<String>,
    /// Cover image URL
    #[serde(default)]
    pub cover: Option<String>,
    /// Ordered lesson headings
    #[serde(default)]
    pub lessons: Option<Vec<String>>,
    /// Difficulty level, absent on older documents
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Module fields returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSummary {
    /// Display title
    pub title: String,
    /// Unique URL-safe identifier
    pub slug: String,
    /// Short description
    pub summary: Option<String>,
    /// Cover image URL
    pub cover: Option<String>,
    /// Difficulty level
    pub difficulty: String,
}

/// Full module returned by the single-module endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDetail {
    /// Fields shared with the summary
    #[serde(flatten)]
    pub summary: ModuleSummary,
    /// Ordered lesson headings
    pub lessons: Vec<String>,
}

impl From<ModuleDocument> for ModuleSummary {
    fn from(doc: ModuleDocument) -> Self {
        Self {
            title: doc.title,
            slug: doc.slug,
            summary: doc.summary,
            cover: doc.cover,
            difficulty: Difficulty::or_default(doc.difficulty),
        }
    }
}

impl From<ModuleDocument> for ModuleDetail {
    fn from(mut doc: ModuleDocument) -> Self {
        let lessons = doc.lessons.take().unwrap_or_default();
        Self {
            summary: doc.into(),
            lessons,
        }
    }
}
