// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Incremental activity logging.
//!
//! Instead of recomputing every total, logging or removing an activity
//! applies its points as a delta to the owning user and their team, then
//! re-ranks the leaderboard. The result matches what a full
//! [`aggregation::recompute`](crate::services::aggregation::recompute) would
//! produce for the same data.

use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::Mutex;
use uuid::Uuid;
use validator::Validate;

use crate::db::EntityStore;
use crate::error::{AppError, ReferentialError, Result};
use crate::models::{Activity, ActivityType, LeaderboardEntry, Team, User};
use crate::services::aggregation::{self, AggregationReport};
use crate::services::populate::{self, PopulateOptions, PopulateSummary};
use crate::services::{ranking, scoring};
use crate::time_utils::now_rfc3339;

/// Request to log a new activity.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewActivity {
    #[validate(email)]
    pub user_email: String,
    pub activity_type: String,
    /// Minutes
    #[validate(range(min = 1, max = 1440))]
    pub duration: i64,
    /// Kilometers; ignored for non-distance types
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1000.0))]
    pub distance: f64,
    #[serde(default)]
    pub calories_burned: u32,
}

/// Whether a delta adds or removes points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Add,
    Remove,
}

fn apply(current: u64, points: u32, direction: Direction) -> u64 {
    match direction {
        Direction::Add => current.saturating_add(u64::from(points)),
        Direction::Remove => current.saturating_sub(u64::from(points)),
    }
}

/// Writes activities and keeps user/team totals current.
///
/// Every write to user, team or leaderboard documents made through one
/// `ActivityLog` (and its clones) is serialized: incremental deltas, full
/// recomputation and population all take the same lock.
#[derive(Clone)]
pub struct ActivityLog<S> {
    store: S,
    write_lock: Arc<Mutex<()>>,
}

impl<S: EntityStore> ActivityLog<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Validate, score and store a new activity, then update totals.
    pub async fn log_activity(&self, request: NewActivity) -> Result<Activity> {
        request.validate()?;
        let activity_type: ActivityType = request.activity_type.parse()?;
        let distance = if activity_type.is_distance_bearing() {
            request.distance
        } else {
            0.0
        };
        let points_earned = scoring::score(activity_type, request.duration, distance)?;

        let _guard = self.write_lock.lock().await;

        let user = self
            .store
            .get::<User>(&request.user_email)
            .await?
            .ok_or_else(|| ReferentialError::UnknownUser(request.user_email.clone()))?;

        let activity = Activity {
            id: Uuid::new_v4().to_string(),
            user_email: user.email.clone(),
            user_name: user.name.clone(),
            activity_type,
            duration: u32::try_from(request.duration)
                .map_err(|_| AppError::BadRequest("Duration out of range".to_string()))?,
            distance,
            calories_burned: request.calories_burned,
            points_earned,
            date: now_rfc3339(),
        };

        let activity = self.store.create(&activity).await?;
        self.apply_delta(user, activity.points_earned, Direction::Add)
            .await?;

        tracing::info!(
            activity_id = %activity.id,
            user = %activity.user_email,
            points = activity.points_earned,
            "Activity logged"
        );

        Ok(activity)
    }

    /// Delete an activity and take its points back off the totals.
    pub async fn remove_activity(&self, activity_id: &str) -> Result<Activity> {
        let _guard = self.write_lock.lock().await;

        let activity = self
            .store
            .get::<Activity>(activity_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Activity {}", activity_id)))?;

        self.store.delete::<Activity>(activity_id).await?;

        match self.store.get::<User>(&activity.user_email).await? {
            Some(user) => {
                self.apply_delta(user, activity.points_earned, Direction::Remove)
                    .await?
            }
            None => {
                tracing::warn!(
                    activity_id,
                    user = %activity.user_email,
                    "Removed orphan activity; no totals to adjust"
                );
            }
        }

        tracing::info!(activity_id, points = activity.points_earned, "Activity removed");
        Ok(activity)
    }

    /// Recompute all totals from the stored activities and rebuild the
    /// leaderboard.
    pub async fn recompute(&self) -> Result<(AggregationReport, Vec<LeaderboardEntry>)> {
        let _guard = self.write_lock.lock().await;

        let report = aggregation::recompute(&self.store).await?;
        let entries = ranking::rebuild_leaderboard(&self.store).await?;
        Ok((report, entries))
    }

    /// Wipe and repopulate the store. See [`populate::populate`].
    pub async fn populate(&self, options: PopulateOptions) -> Result<PopulateSummary> {
        let _guard = self.write_lock.lock().await;

        populate::populate(&self.store, options).await
    }

    async fn apply_delta(&self, mut user: User, points: u32, direction: Direction) -> Result<()> {
        user.points = apply(user.points, points, direction);
        self.store.save(&user).await?;

        if let Some(team_name) = user.team.as_deref() {
            match self.store.get::<Team>(team_name).await? {
                Some(mut team) => {
                    team.total_points = apply(team.total_points, points, direction);
                    self.store.save(&team).await?;
                }
                None => {
                    let anomaly = ReferentialError::UnknownTeam {
                        user_email: user.email.clone(),
                        team: team_name.to_string(),
                    };
                    tracing::warn!(anomaly = %anomaly, "Team total not updated");
                }
            }
        }

        ranking::rebuild_leaderboard(&self.store).await?;
        Ok(())
    }
}
