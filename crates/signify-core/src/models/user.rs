// ABOUTME: User document, profile response, and the lazily-created default profile
// ABOUTME: Profiles are keyed by email and synthesized with fixed starter values on first read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use serde::{Deserialize, Serialize};

/// Display name given to profiles created on first read
pub const DEFAULT_PROFILE_NAME: &str = "Pengguna";
/// Starting points for a new profile
pub const DEFAULT_PROFILE_POINTS: i64 = 120;
/// Starting level for a new profile
pub const DEFAULT_PROFILE_LEVEL: i64 = 2;
/// Starting streak for a new profile
pub const DEFAULT_PROFILE_STREAK: i64 = 5;
/// Badge awarded to every new profile
pub const DEFAULT_PROFILE_BADGE: &str = "Pemula";

/// A user as stored in the `user` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Unique email
    pub email: String,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// Accumulated points
    #[serde(default)]
    pub points: Option<i64>,
    /// Current level
    #[serde(default)]
    pub level: Option<i64>,
    /// Consecutive-day streak
    #[serde(default)]
    pub streak: Option<i64>,
    /// Earned badges
    #[serde(default)]
    pub badges: Option<Vec<String>>,
}

impl UserDocument {
    /// The profile persisted the first time an unknown email is read
    #[must_use]
    pub fn starter(email: &str) -> Self {
        Self {
            name: Some(DEFAULT_PROFILE_NAME.to_owned()),
            email: email.to_owned(),
            avatar: None,
            points: Some(DEFAULT_PROFILE_POINTS),
            level: Some(DEFAULT_PROFILE_LEVEL),
            streak: Some(DEFAULT_PROFILE_STREAK),
            badges: Some(vec![DEFAULT_PROFILE_BADGE.to_owned()]),
        }
    }
}

/// Profile returned to clients
///
/// Absent stored fields fall back to a zeroed profile (level 1), not the
/// starter values, so a partially written document reads back as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Email
    pub email: String,
    /// Avatar image URL
    pub avatar: Option<String>,
    /// Accumulated points
    pub points: i64,
    /// Current level
    pub level: i64,
    /// Consecutive-day streak
    pub streak: i64,
    /// Earned badges
    pub badges: Vec<String>,
}

impl From<UserDocument> for UserProfile {
    fn from(doc: UserDocument) -> Self {
        Self {
            name: doc.name.unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_owned()),
            email: doc.email,
            avatar: doc.avatar,
            points: doc.points.unwrap_or(0),
            level: doc.level.unwrap_or(1),
            streak: doc.streak.unwrap_or(0),
            badges: doc.badges.unwrap_or_default(),
        }
    }
}
