// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Logged activity model for storage and API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::db::{collections, Entity};
use crate::error::ValidationError;

/// The fixed vocabulary of activity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityType {
    Running,
    Cycling,
    Swimming,
    #[serde(rename = "Strength Training")]
    StrengthTraining,
    Yoga,
    Walking,
}

impl ActivityType {
    pub const ALL: [ActivityType; 6] = [
        ActivityType::Running,
        ActivityType::Cycling,
        ActivityType::Swimming,
        ActivityType::StrengthTraining,
        ActivityType::Yoga,
        ActivityType::Walking,
    ];

    /// Display name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Running => "Running",
            ActivityType::Cycling => "Cycling",
            ActivityType::Swimming => "Swimming",
            ActivityType::StrengthTraining => "Strength Training",
            ActivityType::Yoga => "Yoga",
            ActivityType::Walking => "Walking",
        }
    }

    /// Whether distance counts toward points for this type.
    pub fn is_distance_bearing(self) -> bool {
        matches!(
            self,
            ActivityType::Running | ActivityType::Cycling | ActivityType::Walking
        )
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownActivityType(s.to_string()))
    }
}

/// Stored activity record.
///
/// `user_email` and `user_name` are copied from the user at creation time and
/// are not kept in sync if the user changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Opaque ID (also used as document ID)
    pub id: String,
    pub user_email: String,
    pub user_name: String,
    pub activity_type: ActivityType,
    /// Duration in minutes
    pub duration: u32,
    /// Distance in kilometers (0.0 for non-distance types)
    pub distance: f64,
    pub calories_burned: u32,
    /// Computed once when the activity is logged
    pub points_earned: u32,
    /// When the activity was logged (ISO 8601)
    pub date: String,
}

impl Entity for Activity {
    const COLLECTION: &'static str = collections::ACTIVITIES;

    fn id(&self) -> String {
        self.id.clone()
    }
}
