// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! OctoFit Tracker: team fitness points and leaderboard backend
//!
//! This crate scores logged exercise activities, rolls points up from users
//! to teams, and ranks users on a leaderboard. Storage is reached through
//! the [`db::EntityStore`] trait.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::EntityStore;
use services::ActivityLog;

/// Shared application state.
pub struct AppState<S> {
    pub config: Config,
    pub store: S,
    pub activity_log: ActivityLog<S>,
}

impl<S: EntityStore> AppState<S> {
    pub fn new(config: Config, store: S) -> Self {
        Self {
            config,
            activity_log: ActivityLog::new(store.clone()),
            store,
        }
    }
}
