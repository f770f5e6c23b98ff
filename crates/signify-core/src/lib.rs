// ABOUTME: Core types for the SignifyLearn sign-language learning API
// ABOUTME: Foundation crate with error handling, pagination, validated emails, and document models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

#![deny(unsafe_code)]

//! # Signify Core
//!
//! Foundation crate providing shared types for the SignifyLearn API. Nothing in
//! here knows about the document store or the HTTP server beyond optional
//! conversions, so it changes rarely and compiles once for the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **pagination**: Offset pagination (`page`, `page_size`)
//! - **email**: Validated `EmailAddress` used at the request boundary
//! - **models**: Gesture, module, quiz, user, favorite and progress documents

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Offset-based pagination parameters
pub mod pagination;

/// Email address validation for request boundaries
pub mod email;

/// Document models with read-time defaults
pub mod models;

pub use email::EmailAddress;
pub use errors::{AppError, AppResult, ErrorCode};
pub use pagination::PageRequest;
