// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard ranking.

use std::cmp::Ordering;

use crate::db::{EntityStore, Filter};
use crate::error::Result;
use crate::models::{LeaderboardEntry, User};
use crate::time_utils::now_rfc3339;

/// Leaderboard order: most points first, ties broken by email ascending.
fn leaderboard_order(a: &User, b: &User) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| a.email.cmp(&b.email))
}

/// Rank users into leaderboard entries.
///
/// Every user gets exactly one entry, ranks run 1..=N with no gaps, and the
/// result is independent of the input order.
pub fn rank_users(users: &[User], updated_at: &str) -> Vec<LeaderboardEntry> {
    let mut ordered: Vec<&User> = users.iter().collect();
    ordered.sort_by(|a, b| leaderboard_order(a, b));

    ordered
        .into_iter()
        .zip(1u32..)
        .map(|(user, rank)| LeaderboardEntry {
            user_email: user.email.clone(),
            user_name: user.name.clone(),
            team: user.team.clone(),
            total_points: user.points,
            rank,
            updated_at: updated_at.to_string(),
        })
        .collect()
}

/// Replace the stored leaderboard with a fresh ranking of all users.
pub async fn rebuild_leaderboard<S: EntityStore>(store: &S) -> Result<Vec<LeaderboardEntry>> {
    let users = store.find::<User>(Filter::All).await?;
    let entries = rank_users(&users, &now_rfc3339());

    let removed = store.delete_all::<LeaderboardEntry>().await?;
    for entry in &entries {
        store.create(entry).await?;
    }

    tracing::info!(
        entries = entries.len(),
        replaced = removed,
        "Leaderboard rebuilt"
    );

    Ok(entries)
}

/// Stored leaderboard, ordered by rank.
pub async fn leaderboard<S: EntityStore>(store: &S) -> Result<Vec<LeaderboardEntry>> {
    let mut entries = store.find::<LeaderboardEntry>(Filter::All).await?;
    entries.sort_by_key(|e| e.rank);
    Ok(entries)
}
