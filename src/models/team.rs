// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Team model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::db::{collections, Entity};

/// A team of users competing for combined points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Team {
    /// Unique team name (also used as document ID)
    pub name: String,
    pub description: String,
    /// Sum of member points as of the last aggregation
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_points: u64,
    /// Number of users whose `team` field names this team
    pub member_count: u32,
    /// When the team was created (ISO 8601)
    pub created_at: String,
}

impl Team {
    /// New team with zero totals.
    pub fn new(name: &str, description: &str, created_at: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            total_points: 0,
            member_count: 0,
            created_at: created_at.to_string(),
        }
    }
}

impl Entity for Team {
    const COLLECTION: &'static str = collections::TEAMS;

    fn id(&self) -> String {
        self.name.clone()
    }
}
