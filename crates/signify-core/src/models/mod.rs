// ABOUTME: Document models for the six SignifyLearn collections
// ABOUTME: Stored documents keep optional fields optional; response shapes apply defaults on projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

//! Document models
//!
//! Every collection has two views:
//!
//! - a `*Document` type mirroring what is stored, where any field the store
//!   does not guarantee is an `Option`
//! - a response shape that the document is projected into, with the read-time
//!   defaults (`difficulty` → `"Pemula"`, missing lists → empty) applied by the
//!   `From` conversion

/// Sign-language gestures
pub mod gesture;
/// Learning modules and their ordered lessons
pub mod module;
/// Quiz questions attached to modules by slug
pub mod quiz;
/// User profiles
pub mod user;
/// User/gesture favorites
pub mod favorite;
/// Per-user, per-module lesson progress
pub mod progress;

pub use favorite::Favorite;
pub use gesture::{Difficulty, GestureDetail, GestureDocument, GestureSummary};
pub use module::{ModuleDetail, ModuleDocument, ModuleSummary};
pub use progress::{CompletedLessons, ProgressDocument};
pub use quiz::{QuizQuestion, QuizQuestionDocument};
pub use user::{UserDocument, UserProfile};

use serde::{Deserialize, Serialize};

/// Acknowledgement returned by write endpoints
///
/// `ok` is `false` only when the write could not reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteAck {
    /// Whether the write was applied
    pub ok: bool,
}

impl WriteAck {
    /// Successful write
    #[must_use]
    pub const fn applied() -> Self {
        Self { ok: true }
    }

    /// Write skipped because the store failed
    #[must_use]
    pub const fn failed() -> Self {
        Self { ok: false }
    }
}
