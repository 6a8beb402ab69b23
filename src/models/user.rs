// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::db::{collections, Entity};

/// User profile stored in the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    /// Email address (also used as document ID)
    pub email: String,
    /// Display name
    pub name: String,
    /// Team name, if the user has joined one
    pub team: Option<String>,
    /// Cached sum of the user's activity points as of the last aggregation
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: u64,
    /// When the user was created (ISO 8601)
    pub created_at: String,
}

impl User {
    /// New user with zero points.
    pub fn new(email: &str, name: &str, team: Option<&str>, created_at: &str) -> Self {
        Self {
            email: email.to_string(),
            name: name.to_string(),
            team: team.map(str::to_string),
            points: 0,
            created_at: created_at.to_string(),
        }
    }
}

impl Entity for User {
    const COLLECTION: &'static str = collections::USERS;

    fn id(&self) -> String {
        self.email.clone()
    }
}
