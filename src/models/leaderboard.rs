// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Materialized leaderboard entries.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::db::{collections, Entity};

/// Point-in-time snapshot of one user's standing.
///
/// Entries are never updated individually: the ranking service deletes the
/// whole collection and writes a fresh set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardEntry {
    /// User email (also used as document ID)
    pub user_email: String,
    pub user_name: String,
    pub team: Option<String>,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_points: u64,
    /// Dense 1-based rank, 1 = most points
    pub rank: u32,
    /// When this snapshot was taken (ISO 8601)
    pub updated_at: String,
}

impl Entity for LeaderboardEntry {
    const COLLECTION: &'static str = collections::LEADERBOARD;

    fn id(&self) -> String {
        self.user_email.clone()
    }
}
