// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database population workflow.
//!
//! Wipes every collection and rebuilds it from scratch:
//! 1. Delete all users, teams, activities, leaderboard entries and workouts
//! 2. Create the teams and their users (zero points)
//! 3. Generate random activities per user
//! 4. Aggregate user and team totals
//! 5. Rebuild the leaderboard
//! 6. Insert the workout catalog
//!
//! Steps run in order with no surrounding transaction: if one fails, the
//! writes of earlier steps stay in place.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::db::{EntityStore, Filter};
use crate::error::{AppError, Result};
use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};
use crate::services::generator::ActivityGenerator;
use crate::services::seed_data::{workout_catalog, ROSTERS};
use crate::services::{aggregation, ranking};
use crate::time_utils::now_rfc3339;

/// Options for [`populate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PopulateOptions {
    /// Must be `true`: populating deletes all existing data.
    #[serde(default)]
    pub confirm_wipe: bool,
    /// RNG seed; a random one is drawn (and reported) when absent.
    pub seed: Option<u64>,
}

/// Total points of one team after population.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TeamPoints {
    pub team: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_points: u64,
}

/// What a population run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PopulateSummary {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub seed: u64,
    pub teams: usize,
    pub users: usize,
    pub activities: usize,
    pub leaderboard_entries: usize,
    pub workouts: usize,
    pub team_points: Vec<TeamPoints>,
}

/// Delete all data and repopulate the store with seed data.
///
/// Refuses with [`AppError::ConfirmationRequired`] unless
/// `options.confirm_wipe` is set.
pub async fn populate<S: EntityStore>(store: &S, options: PopulateOptions) -> Result<PopulateSummary> {
    if !options.confirm_wipe {
        tracing::warn!("Refusing to populate without wipe confirmation");
        return Err(AppError::ConfirmationRequired);
    }

    let seed = options.seed.unwrap_or_else(rand::random);
    let now = now_rfc3339();
    tracing::info!(seed, "Starting database population");

    tracing::info!("Clearing existing data");
    clear_all(store).await?;

    tracing::info!("Creating teams and users");
    let mut users = Vec::new();
    for roster in &ROSTERS {
        store.create(&roster.team(&now)).await?;
        for user in roster.users(&now) {
            users.push(store.create(&user).await?);
        }
    }

    tracing::info!("Creating activities");
    let mut generator = ActivityGenerator::seeded(seed);
    for user in &users {
        let activities = generator.generate_for(user, &now)?;
        tracing::debug!(user = %user.email, count = activities.len(), "Generated activities");
        for activity in &activities {
            store.create(activity).await?;
        }
    }

    tracing::info!("Aggregating points");
    aggregation::recompute(store).await?;

    tracing::info!("Creating leaderboard");
    ranking::rebuild_leaderboard(store).await?;

    tracing::info!("Creating workouts");
    for workout in workout_catalog(&now) {
        store.create(&workout).await?;
    }

    let summary = summarize(store, seed).await?;
    tracing::info!(
        seed = summary.seed,
        teams = summary.teams,
        users = summary.users,
        activities = summary.activities,
        leaderboard_entries = summary.leaderboard_entries,
        workouts = summary.workouts,
        "Database population complete"
    );
    for team in &summary.team_points {
        tracing::info!(team = %team.team, total_points = team.total_points, "Team total");
    }

    Ok(summary)
}

async fn clear_all<S: EntityStore>(store: &S) -> Result<()> {
    let users = store.delete_all::<User>().await?;
    let teams = store.delete_all::<Team>().await?;
    let activities = store.delete_all::<Activity>().await?;
    let entries = store.delete_all::<LeaderboardEntry>().await?;
    let workouts = store.delete_all::<Workout>().await?;

    tracing::info!(users, teams, activities, entries, workouts, "Cleared existing data");
    Ok(())
}

async fn summarize<S: EntityStore>(store: &S, seed: u64) -> Result<PopulateSummary> {
    let mut teams = store.find::<Team>(Filter::All).await?;
    teams.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(PopulateSummary {
        seed,
        teams: teams.len(),
        users: store.find::<User>(Filter::All).await?.len(),
        activities: store.find::<Activity>(Filter::All).await?.len(),
        leaderboard_entries: store.find::<LeaderboardEntry>(Filter::All).await?.len(),
        workouts: store.find::<Workout>(Filter::All).await?.len(),
        team_points: teams
            .into_iter()
            .map(|t| TeamPoints {
                team: t.name,
                total_points: t.total_points,
            })
            .collect(),
    })
}
