// ABOUTME: Unified error type with standard error codes and HTTP status mapping
// ABOUTME: Used by every layer of the SignifyLearn API, from the store to the routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

//! # Unified Error Handling System
//!
//! Defines the error codes, the `AppError` type and the JSON error envelope so
//! that every failure leaves the service in the same shape. Store failures are
//! not surfaced directly by the public endpoints: the service layer folds them
//! into empty results, `404`s, or `{ "ok": false }` flags.

#[cfg(feature = "http-response")]
mod http;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation
    /// Generic invalid request input
    InvalidInput,
    /// A value did not match the expected format
    InvalidFormat,
    /// A required field was not supplied
    MissingRequiredField,
    /// A numeric value was outside its accepted range
    ValueOutOfRange,
    /// A well-formed body whose fields failed validation
    UnprocessableEntity,

    // Resource management
    /// The requested single resource does not exist
    ResourceNotFound,
    /// The backing store is not connected
    ResourceUnavailable,

    // Configuration
    /// Configuration could not be loaded or parsed
    ConfigError,

    // Internal
    /// Unexpected internal failure
    InternalError,
    /// A store query or mutation failed
    DatabaseError,
    /// JSON encoding or decoding failed
    SerializationError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput
            | Self::InvalidFormat
            | Self::MissingRequiredField
            | Self::ValueOutOfRange => 400,

            Self::ResourceNotFound => 404,

            Self::UnprocessableEntity => 422,

            Self::ResourceUnavailable => 503,

            Self::ConfigError | Self::InternalError | Self::DatabaseError | Self::SerializationError => {
                500
            }
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::UnprocessableEntity => "The request body failed validation",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceUnavailable => "The document store is not available",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Whether this error means the store could not be used at all
    #[must_use]
    pub const fn is_store_failure(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ResourceUnavailable | ErrorCode::DatabaseError
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Short message for display
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Resource not found, with the exact message shown to clients
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// The document store is not connected
    #[must_use]
    pub fn store_unavailable() -> Self {
        Self::new(
            ErrorCode::ResourceUnavailable,
            "Document store is not connected",
        )
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::SerializationError,
            format!("JSON error: {error}"),
        )
        .with_source(error)
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        Self::database(error.to_string()).with_source(error)
    }
}
