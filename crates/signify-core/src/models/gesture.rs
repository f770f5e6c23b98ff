// ABOUTME: Gesture document and its summary/detail response shapes
// ABOUTME: Applies the "Pemula" difficulty default and empty-list defaults on projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level shared by gestures and modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    /// Beginner
    #[default]
    Pemula,
    /// Intermediate
    Menengah,
    /// Advanced
    Lanjut,
}

impl Difficulty {
    /// Stored string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pemula => "Pemula",
            Self::Menengah => "Menengah",
            Self::Lanjut => "Lanjut",
        }
    }

    /// Resolve an optional stored difficulty, defaulting absent values
    ///
    /// Unknown strings are passed through untouched; only absence is defaulted.
    #[must_use]
    pub fn or_default(stored: Option<String>) -> String {
        stored.unwrap_or_else(|| Self::default().as_str().to_owned())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A gesture as stored in the `gesture` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureDocument {
    /// Display name
    pub name: String,
    /// Unique URL-safe identifier
    pub slug: String,
    /// Category, e.g. `A-Z` or `Kata Dasar`
    pub category: String,
    /// Difficulty level, absent on older documents
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Thumbnail image URL
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Demonstration video URL
    #[serde(default)]
    pub video_url: Option<String>,
    /// Step-by-step guide
    #[serde(default)]
    pub steps: Option<Vec<String>>,
    /// Usage examples
    #[serde(default)]
    pub examples: Option<Vec<String>>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Gesture fields returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureSummary {
    /// Display name
    pub name: String,
    /// Unique URL-safe identifier
    pub slug: String,
    /// Category
    pub category: String,
    /// Difficulty level
    pub difficulty: String,
    /// Thumbnail image URL
    pub thumbnail: Option<String>,
}

/// Full gesture returned by the single-gesture endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureDetail {
    /// Fields shared with the summary
    #[serde(flatten)]
    pub summary: GestureSummary,
    /// Demonstration video URL
    pub video_url: Option<String>,
    /// Step-by-step guide
    pub steps: Vec<String>,
    /// Usage examples
    pub examples: Vec<String>,
    /// Free-form tags
    pub tags: Vec<String>,
}

impl From<GestureDocument> for GestureSummary {
    fn from(doc: GestureDocument) -> Self {
        Self {
            name: doc.name,
            slug: doc.slug,
            category: doc.category,
            difficulty: Difficulty::or_default(doc.difficulty),
            thumbnail: doc.thumbnail,
        }
    }
}

impl From<GestureDocument> for GestureDetail {
    fn from(doc: GestureDocument) -> Self {
        Self {
            video_url: doc.video_url,
            steps: doc.steps.unwrap_or_default(),
            examples: doc.examples.unwrap_or_default(),
            tags: doc.tags.unwrap_or_default(),
            summary: GestureSummary {
                name: doc.name,
                slug: doc.slug,
                category: doc.category,
                difficulty: Difficulty::or_default(doc.difficulty),
                thumbnail: doc.thumbnail,
            },
        }
    }
}
