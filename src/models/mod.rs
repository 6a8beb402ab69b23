// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;

pub use activity::{Activity, ActivityType};
pub use leaderboard::LeaderboardEntry;
pub use team::Team;
pub use user::User;
pub use workout::{Exercise, Workout};
