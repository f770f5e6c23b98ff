// ABOUTME: Favorite association between a user email and a gesture slug
// ABOUTME: The pair is the identity; the slug is not checked against the gesture collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use serde::{Deserialize, Serialize};

/// A saved user/gesture pair from the `favorite` collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Favorite {
    /// Owner email
    pub user_email: String,
    /// Favorited gesture slug
    pub gesture_slug: String,
}
