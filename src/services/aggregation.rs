// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Point aggregation: activities roll up into users, users into teams.
//!
//! [`compute_totals`] is a pure fold over the three collections and
//! [`recompute`] persists its result. The fold ignores whatever points the
//! users and teams currently carry, so running it twice on the same
//! activities gives the same answer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::db::{EntityStore, Filter};
use crate::error::{ReferentialError, Result};
use crate::models::{Activity, Team, User};

/// Freshly computed totals, keyed by user email and team name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub user_points: BTreeMap<String, u64>,
    pub team_points: BTreeMap<String, u64>,
    pub team_members: BTreeMap<String, u32>,
    /// Records skipped because they point at something that does not exist
    pub anomalies: Vec<ReferentialError>,
}

/// Outcome of a full recomputation.
#[derive(Debug, Clone, Serialize)]
pub struct AggregationReport {
    pub users_updated: usize,
    pub teams_updated: usize,
    pub activities_counted: usize,
    pub anomalies: Vec<String>,
}

/// Fold activities into per-user and per-team totals.
///
/// Every user and team appears in the result, with zero if nothing
/// contributed. Activities for unknown users and users on unknown teams are
/// left out and reported in [`Totals::anomalies`].
pub fn compute_totals(users: &[User], teams: &[Team], activities: &[Activity]) -> Totals {
    let mut totals = Totals {
        user_points: users.iter().map(|u| (u.email.clone(), 0)).collect(),
        team_points: teams.iter().map(|t| (t.name.clone(), 0)).collect(),
        team_members: teams.iter().map(|t| (t.name.clone(), 0)).collect(),
        anomalies: Vec::new(),
    };

    for activity in activities {
        match totals.user_points.get_mut(&activity.user_email) {
            Some(points) => *points += u64::from(activity.points_earned),
            None => totals.anomalies.push(ReferentialError::OrphanActivity {
                activity_id: activity.id.clone(),
                user_email: activity.user_email.clone(),
            }),
        }
    }

    for user in users {
        let Some(team) = user.team.as_deref() else {
            continue;
        };
        let user_points = totals.user_points.get(&user.email).copied().unwrap_or(0);

        match totals.team_points.get_mut(team) {
            Some(points) => {
                *points += user_points;
                *totals.team_members.entry(team.to_string()).or_insert(0) += 1;
            }
            None => totals.anomalies.push(ReferentialError::UnknownTeam {
                user_email: user.email.clone(),
                team: team.to_string(),
            }),
        }
    }

    totals
}

/// Recompute every user's points and every team's totals from the stored
/// activities, and save the results.
pub async fn recompute<S: EntityStore>(store: &S) -> Result<AggregationReport> {
    let users = store.find::<User>(Filter::All).await?;
    let teams = store.find::<Team>(Filter::All).await?;
    let activities = store.find::<Activity>(Filter::All).await?;

    let totals = compute_totals(&users, &teams, &activities);

    for anomaly in &totals.anomalies {
        tracing::warn!(anomaly = %anomaly, "Skipping record during aggregation");
    }

    for mut user in users.iter().cloned() {
        user.points = totals.user_points.get(&user.email).copied().unwrap_or(0);
        store.save(&user).await?;
    }

    for mut team in teams.iter().cloned() {
        team.total_points = totals.team_points.get(&team.name).copied().unwrap_or(0);
        team.member_count = totals.team_members.get(&team.name).copied().unwrap_or(0);
        store.save(&team).await?;
    }

    let orphaned = totals
        .anomalies
        .iter()
        .filter(|a| matches!(a, ReferentialError::OrphanActivity { .. }))
        .count();

    let report = AggregationReport {
        users_updated: users.len(),
        teams_updated: teams.len(),
        activities_counted: activities.len() - orphaned,
        anomalies: totals.anomalies.iter().map(ToString::to_string).collect(),
    };

    tracing::info!(
        users = report.users_updated,
        teams = report.teams_updated,
        activities = report.activities_counted,
        anomalies = report.anomalies.len(),
        "Aggregation complete"
    );

    Ok(report)
}
