// ABOUTME: One-time seeding of the gesture, module, and quiz collections
// ABOUTME: Each collection is filled from the sample data only while it is empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

//! Seed initializer
//!
//! Run at server startup (unless disabled) and by the `signify-seed`
//! binary. Collections are checked independently, so a store with modules
//! but no gestures only receives gestures.

/// Sample documents
pub mod data;

use crate::database::{Collection, Database, Store};
use crate::services::with_store;
use serde::Serialize;
use signify_core::errors::AppResult;
use std::fmt;
use tracing::{info, warn};

/// What a seeding run inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Gestures inserted
    pub gestures: u64,
    /// Modules inserted
    pub modules: u64,
    /// Quiz questions inserted
    pub quiz_questions: u64,
    /// Seeding did not run because the store was unavailable
    pub skipped: bool,
}

impl SeedReport {
    /// Report for a run that could not reach the store
    #[must_use]
    pub const fn skipped() -> Self {
        Self {
            gestures: 0,
            modules: 0,
            quiz_questions: 0,
            skipped: true,
        }
    }

    /// Total documents inserted
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.gestures + self.modules + self.quiz_questions
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.skipped {
            return f.write_str("seeding skipped (store unavailable)");
        }
        write!(
            f,
            "{} gestures, {} modules, {} quiz questions inserted",
            self.gestures, self.modules, self.quiz_questions
        )
    }
}

/// Fill each empty seeded collection with its sample data
///
/// # Errors
///
/// Returns an error if the sample data fails validation; store failures
/// produce a skipped report instead
pub async fn seed_if_empty(store: &Store) -> AppResult<SeedReport> {
    let report = with_store(store, "seed", seed_database, || {
        warn!("Seeding skipped, document store unavailable");
        Ok(SeedReport::skipped())
    })
    .await?;

    if !report.skipped {
        info!(
            seed.gestures = report.gestures,
            seed.modules = report.modules,
            seed.quiz_questions = report.quiz_questions,
            "Seeding complete"
        );
    }
    Ok(report)
}

async fn seed_database(db: &Database) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();

    if db.count_documents(Collection::Gesture).await? == 0 {
        report.gestures = db.insert_gestures(&data::gestures()).await?;
    }
    if db.count_documents(Collection::Module).await? == 0 {
        report.modules = db.insert_modules(&data::modules()).await?;
    }
    if db.count_documents(Collection::QuizQuestion).await? == 0 {
        report.quiz_questions = db.insert_quiz_questions(&data::quiz_questions()).await?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_runs_once() {
        let store = Store::connected(Database::new("sqlite::memory:").await.unwrap());

        let first = seed_if_empty(&store).await.unwrap();
        assert_eq!((first.gestures, first.modules, first.quiz_questions), (3, 2, 1));
        assert_eq!(first.total(), 6);

        let second = seed_if_empty(&store).await.unwrap();
        assert_eq!(second, SeedReport::default());
    }

    #[tokio::test]
    async fn test_seed_without_store_is_skipped() {
        let report = seed_if_empty(&Store::disconnected()).await.unwrap();
        assert!(report.skipped);
        assert_eq!(report.total(), 0);
    }
}
