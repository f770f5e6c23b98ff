// ABOUTME: Offset pagination module for page/page_size style listing
// ABOUTME: Converts 1-based page numbers into skip/limit pairs for store queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use crate::errors::{AppError, AppResult};

/// Default page number when the client does not supply one
pub const DEFAULT_PAGE: u32 = 1;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Validated offset pagination request
///
/// Pages are 1-based: page 1 skips nothing, page `n` skips `(n - 1) * page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Build a page request, rejecting zero pages and zero sizes
    ///
    /// Page sizes have no upper bound: a large `page_size` returns every match.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if `page` or `page_size` is 0
    pub fn new(page: u32, page_size: u32) -> AppResult<Self> {
        if page == 0 {
            return Err(AppError::out_of_range("page must be at least 1"));
        }
        if page_size == 0 {
            return Err(AppError::out_of_range("page_size must be at least 1"));
        }
        Ok(Self { page, page_size })
    }

    /// Build a page request from optional query values, applying defaults
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`PageRequest::new`]
    pub fn from_query(page: Option<u32>, page_size: Option<u32>) -> AppResult<Self> {
        Self::new(
            page.unwrap_or(DEFAULT_PAGE),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    /// Number of items to skip
    #[must_use]
    pub const fn offset(&self) -> i64 {
        (self.page as i64 - 1).saturating_mul(self.page_size as i64)
    }

    /// Maximum number of items to return
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.page_size as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
