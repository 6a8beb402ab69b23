// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout catalog model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::db::{collections, Entity};

/// A suggested workout. Reference data, never derived from activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Workout {
    /// Document ID
    pub id: String,
    pub name: String,
    /// Strength, Cardio, Flexibility, Mixed
    pub category: String,
    /// Beginner, Intermediate, Advanced
    pub difficulty: String,
    /// Duration in minutes
    pub duration: u32,
    pub description: String,
    /// Exercises in the order they are performed
    pub exercises: Vec<Exercise>,
    pub created_at: String,
}

impl Entity for Workout {
    const COLLECTION: &'static str = collections::WORKOUTS;

    fn id(&self) -> String {
        self.id.clone()
    }
}

/// One step of a workout.
///
/// Only `name` is always present; the remaining fields depend on the kind of
/// exercise (sets/reps for strength moves, duration/rest/rounds for
/// intervals, distance for swims and so on).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Exercise {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Free-form, e.g. "30 seconds"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds: Option<u32>,
    /// Repeat on each side of the body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub each_side: Option<bool>,
    /// Free-form, e.g. "400m"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    /// Sub-exercises of a circuit
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exercises: Vec<String>,
}

impl Exercise {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn sets(mut self, sets: u32) -> Self {
        self.sets = Some(sets);
        self
    }

    pub fn reps(mut self, reps: u32) -> Self {
        self.reps = Some(reps);
        self
    }

    pub fn duration(mut self, duration: &str) -> Self {
        self.duration = Some(duration.to_string());
        self
    }

    pub fn rest(mut self, rest: &str) -> Self {
        self.rest = Some(rest.to_string());
        self
    }

    pub fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = Some(rounds);
        self
    }

    pub fn each_side(mut self) -> Self {
        self.each_side = Some(true);
        self
    }

    pub fn distance(mut self, distance: &str) -> Self {
        self.distance = Some(distance.to_string());
        self
    }

    pub fn circuit(mut self, exercises: &[&str]) -> Self {
        self.exercises = exercises.iter().map(|e| e.to_string()).collect();
        self
    }
}
