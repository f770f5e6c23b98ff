// ABOUTME: Learning module service: listing and single-module lookup
// ABOUTME: Listing omits lessons; the detail view returns them in stored order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use super::with_store;
use crate::database::Store;
use signify_core::errors::{AppError, AppResult};
use signify_core::models::{ModuleDetail, ModuleSummary};

/// All modules in collection order, or none when the store is unavailable
///
/// # Errors
///
/// Returns an error only if a stored document cannot be decoded
pub async fn list_modules(store: &Store) -> AppResult<Vec<ModuleSummary>> {
    let documents = with_store(
        store,
        "list_modules",
        |db| db.find_modules(),
        || Ok(Vec::new()),
    )
    .await?;

    Ok(documents.into_iter().map(ModuleSummary::from).collect())
}

/// Full module by slug
///
/// # Errors
///
/// Returns `ResourceNotFound` ("Module not found") for an unknown slug, or
/// ("Not found") when the store is unavailable
pub async fn get_module(store: &Store, slug: &str) -> AppResult<ModuleDetail> {
    with_store(
        store,
        "get_module",
        |db| db.find_module_by_slug(slug),
        || Err(AppError::not_found("Not found")),
    )
    .await?
    .map(ModuleDetail::from)
    .ok_or_else(|| AppError::not_found("Module not found"))
}
