// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity_log;
pub mod aggregation;
pub mod generator;
pub mod populate;
pub mod ranking;
pub mod scoring;
pub mod seed_data;

pub use activity_log::{ActivityLog, NewActivity};
pub use aggregation::{compute_totals, recompute, AggregationReport, Totals};
pub use generator::ActivityGenerator;
pub use populate::{populate, PopulateOptions, PopulateSummary};
pub use ranking::{rank_users, rebuild_leaderboard};
pub use scoring::score;
