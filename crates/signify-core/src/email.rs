// ABOUTME: Validated email address newtype for request boundaries
// ABOUTME: Rejects malformed addresses during deserialization, before any service logic runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::errors::{AppError, AppResult, ErrorCode};

/// Maximum length of the part before `@`
const MAX_LOCAL_PART_LEN: usize = 64;

/// Maximum length of a whole address
const MAX_ADDRESS_LEN: usize = 254;

static EMAIL_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn email_pattern() -> Option<&'static Regex> {
    EMAIL_PATTERN
        .get_or_init(|| {
            Regex::new(
                r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
            )
            .ok()
        })
        .as_ref()
}

/// An email address that has passed syntax validation
///
/// Deserializing from a string validates it, so a request carrying a malformed
/// address is rejected by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and wrap an email address
    ///
    /// Surrounding whitespace is trimmed and the domain is lowercased, so
    /// `Budi@Example.COM` and `Budi@example.com` name the same learner. The
    /// local part keeps its case.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the address is not syntactically valid
    pub fn parse(raw: &str) -> AppResult<Self> {
        let candidate = raw.trim();
        let Some((local, domain)) = candidate.rsplit_once('@') else {
            return Err(invalid(candidate, "missing '@'"));
        };
        if local.len() > MAX_LOCAL_PART_LEN {
            return Err(invalid(candidate, "local part is too long"));
        }
        if candidate.len() > MAX_ADDRESS_LEN {
            return Err(invalid(candidate, "address is too long"));
        }
        let pattern = email_pattern()
            .ok_or_else(|| AppError::internal("email pattern failed to compile"))?;
        if !pattern.is_match(candidate) {
            return Err(invalid(candidate, "not a valid email address"));
        }
        Ok(Self(format!("{local}@{}", domain.to_ascii_lowercase())))
    }

    /// Borrow the address
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(candidate: &str, reason: &str) -> AppError {
    AppError::new(
        ErrorCode::InvalidFormat,
        format!("'{candidate}' is not a valid email address: {reason}"),
    )
}

impl TryFrom<String> for EmailAddress {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
