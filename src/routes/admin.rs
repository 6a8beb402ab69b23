// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Administrative routes: destructive repopulation and full recomputation.
//!
//! Populating is refused unless `ADMIN_RESET_ENABLED` is set in the
//! configuration *and* the request body carries `"confirm_wipe": true`.

use crate::db::EntityStore;
use crate::error::{AppError, Result};
use crate::services::{AggregationReport, PopulateOptions, PopulateSummary};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use std::sync::Arc;

pub fn routes<S: EntityStore>() -> Router<Arc<AppState<S>>> {
    Router::new()
        .route("/api/admin/populate", post(populate_db::<S>))
        .route("/api/admin/recompute", post(recompute::<S>))
}

async fn populate_db<S: EntityStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(options): Json<PopulateOptions>,
) -> Result<Json<PopulateSummary>> {
    if !state.config.admin_reset_enabled {
        tracing::warn!("Populate requested while admin reset is disabled");
        return Err(AppError::Forbidden(
            "Database reset is disabled on this deployment".to_string(),
        ));
    }

    Ok(Json(state.activity_log.populate(options).await?))
}

#[derive(Serialize)]
pub struct RecomputeResponse {
    pub aggregation: AggregationReport,
    pub leaderboard_entries: usize,
}

/// Recompute all totals from scratch and rebuild the leaderboard.
async fn recompute<S: EntityStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<RecomputeResponse>> {
    let (aggregation, entries) = state.activity_log.recompute().await?;

    Ok(Json(RecomputeResponse {
        aggregation,
        leaderboard_entries: entries.len(),
    }))
}
