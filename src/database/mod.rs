// ABOUTME: Document store backed by SQLite, one table per collection
// ABOUTME: Owns the connection pool, migrations, and collection-level primitives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

//! # Database Management
//!
//! The SignifyLearn store keeps six flat collections (`gesture`, `module`,
//! `quizquestion`, `favorite`, `user`, `progress`). Each collection is a
//! SQLite table; list-valued fields are stored as JSON text and optional
//! fields are nullable, so documents are decoded with defaults on read.
//! Collection order is insertion order.

mod favorites;
mod gestures;
mod modules;
mod progress;
mod quizzes;
mod users;

pub use gestures::GestureFilter;

use serde::{de::DeserializeOwned, Serialize};
use signify_core::errors::{AppError, AppResult};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Row, Sqlite,
};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

/// Pool size for file-backed stores
const FILE_POOL_SIZE: u32 = 5;

/// The six collections served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Sign-language gestures
    Gesture,
    /// Learning modules
    Module,
    /// Quiz questions
    QuizQuestion,
    /// User/gesture favorites
    Favorite,
    /// User profiles
    User,
    /// Lesson progress
    Progress,
}

impl Collection {
    /// Every collection, in migration order
    pub const ALL: [Self; 6] = [
        Self::Gesture,
        Self::Module,
        Self::QuizQuestion,
        Self::Favorite,
        Self::User,
        Self::Progress,
    ];

    /// Collection (and table) name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gesture => "gesture",
            Self::Module => "module",
            Self::QuizQuestion => "quizquestion",
            Self::Favorite => "favorite",
            Self::User => "user",
            Self::Progress => "progress",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Database manager for the SignifyLearn collections
#[derive(Clone, Debug)]
pub struct Database {
    pool: Pool<Sqlite>,
    name: String,
}

impl Database {
    /// Open (creating if needed) the store at `database_url` and run migrations
    ///
    /// In-memory stores are limited to a single long-lived connection, since
    /// every SQLite connection to `:memory:` is its own database.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the store cannot be opened, or
    /// a migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::config(format!("Invalid DATABASE_URL '{database_url}': {e}")))?
            .create_if_missing(true);

        let in_memory = is_in_memory(database_url);
        let pool = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { FILE_POOL_SIZE })
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open store: {e}")).with_source(e))?;

        let db = Self {
            pool,
            name: Self::name_from_url(database_url),
        };

        db.migrate().await?;
        info!(database.name = %db.name, "Document store ready");

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Display name of the store (file stem, or `memory`)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Derive a display name from a SQLite URL
    #[must_use]
    pub fn name_from_url(database_url: &str) -> String {
        if is_in_memory(database_url) {
            return "memory".to_owned();
        }
        let path = database_url
            .trim_start_matches("sqlite://")
            .trim_start_matches("sqlite:");
        let path = path.split('?').next().unwrap_or(path);
        Path::new(path)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .unwrap_or("signify")
            .to_owned()
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index cannot be created
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_gestures().await?;
        self.migrate_modules().await?;
        self.migrate_quiz_questions().await?;
        self.migrate_favorites().await?;
        self.migrate_users().await?;
        self.migrate_progress().await?;
        debug!("Store migrations applied");
        Ok(())
    }

    /// Names of the collections currently present in the store
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog query fails
    pub async fn list_collection_names(&self) -> AppResult<Vec<String>> {
        let rows = sqlx::query(
            r"
            SELECT name FROM sqlite_master
            WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list collections: {e}")))?;

        Ok(rows.iter().map(|row| row.get("name")).collect())
    }

    /// Number of documents in a collection
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails
    pub async fn count_documents(&self, collection: Collection) -> AppResult<u64> {
        let query = format!(r#"SELECT COUNT(*) AS total FROM "{collection}""#);
        let total: i64 = sqlx::query(&query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count {collection}: {e}")))?
            .get("total");
        Ok(u64::try_from(total).unwrap_or(0))
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Process-wide handle to the document store
///
/// The handle is created once at startup and cloned into every request.
/// It is empty when the store could not be opened; every operation then
/// takes its degrade branch instead of failing the process.
#[derive(Clone, Default)]
pub struct Store(Option<Arc<Database>>);

impl Store {
    /// Handle to an open store
    #[must_use]
    pub fn connected(database: Database) -> Self {
        Self(Some(Arc::new(database)))
    }

    /// Handle with no store behind it
    #[must_use]
    pub const fn disconnected() -> Self {
        Self(None)
    }

    /// Whether a store is attached
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.0.is_some()
    }

    /// Borrow the store
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` when no store is attached
    pub fn database(&self) -> AppResult<&Database> {
        self.0.as_deref().ok_or_else(AppError::store_unavailable)
    }
}

/// Encode a list field as JSON text
pub(crate) fn encode_list<T: Serialize>(values: Option<&[T]>) -> AppResult<Option<String>> {
    values
        .map(serde_json::to_string)
        .transpose()
        .map_err(AppError::from)
}

/// Decode a nullable JSON text column into a list field
pub(crate) fn decode_list<T: DeserializeOwned>(raw: Option<String>) -> AppResult<Option<Vec<T>>> {
    raw.map(|text| serde_json::from_str(&text))
        .transpose()
        .map_err(AppError::from)
}

/// Decode a nullable integer column that must be non-negative
pub(crate) fn decode_non_negative(
    raw: Option<i64>,
    column: &str,
) -> AppResult<Option<u32>> {
    raw.map(|value| {
        u32::try_from(value)
            .map_err(|_| AppError::internal(format!("Stored {column} {value} is out of range")))
    })
    .transpose()
}
