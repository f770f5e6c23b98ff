// ABOUTME: Query and JSON extractors that reject with the AppError envelope
// ABOUTME: Malformed query strings answer 400, invalid JSON fields answer 422
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use axum::extract::{FromRequest, FromRequestParts};
use signify_core::errors::AppError;

/// Query-string extractor whose rejection is an `AppError`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// JSON body extractor whose rejection is an `AppError`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
