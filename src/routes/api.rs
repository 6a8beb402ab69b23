// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public API routes: read-only listings plus activity logging.

use crate::db::{EntityStore, Filter};
use crate::error::{AppError, Result};
use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};
use crate::services::{ranking, NewActivity};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes<S: EntityStore>() -> Router<Arc<AppState<S>>> {
    Router::new()
        .route("/api/users", get(list_users::<S>))
        .route("/api/teams", get(list_teams::<S>))
        .route(
            "/api/activities",
            get(list_activities::<S>).post(log_activity::<S>),
        )
        .route("/api/activities/{id}", delete(remove_activity::<S>))
        .route("/api/leaderboard", get(get_leaderboard::<S>))
        .route("/api/workouts", get(list_workouts::<S>))
}

// ─── Listings ────────────────────────────────────────────────

async fn list_users<S: EntityStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<User>>> {
    let mut users = state.store.find::<User>(Filter::All).await?;
    users.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(Json(users))
}

async fn list_teams<S: EntityStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Team>>> {
    let mut teams = state.store.find::<Team>(Filter::All).await?;
    teams.sort_by(|a, b| b.total_points.cmp(&a.total_points).then(a.name.cmp(&b.name)));
    Ok(Json(teams))
}

async fn list_workouts<S: EntityStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Workout>>> {
    let mut workouts = state.store.find::<Workout>(Filter::All).await?;
    workouts.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(Json(workouts))
}

async fn get_leaderboard<S: EntityStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<LeaderboardEntry>>> {
    Ok(Json(ranking::leaderboard(&state.store).await?))
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Deserialize)]
struct ActivitiesQuery {
    /// Only activities logged by this user
    user_email: Option<String>,
}

/// List activities, newest first.
async fn list_activities<S: EntityStore>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<ActivitiesQuery>,
) -> Result<Json<Vec<Activity>>> {
    let filter = match params.user_email {
        Some(email) if email.is_empty() => {
            return Err(AppError::BadRequest("user_email must not be empty".to_string()))
        }
        Some(email) => Filter::eq("user_email", email),
        None => Filter::All,
    };

    let mut activities = state.store.find::<Activity>(filter).await?;
    activities.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
    Ok(Json(activities))
}

async fn log_activity<S: EntityStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<NewActivity>,
) -> Result<(StatusCode, Json<Activity>)> {
    let activity = state.activity_log.log_activity(request).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

async fn remove_activity<S: EntityStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.activity_log.remove_activity(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
