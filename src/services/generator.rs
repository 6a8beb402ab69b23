// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Synthetic activity generation for seeding.
//!
//! Driven by a seeded `ChaCha8Rng`, so the same seed always yields the same
//! activities (including their IDs).

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Builder;

use crate::error::ValidationError;
use crate::models::{Activity, ActivityType, User};
use crate::services::scoring;

/// Activities generated per user.
pub const ACTIVITIES_PER_USER: RangeInclusive<usize> = 5..=10;

/// Session length in minutes.
pub const DURATION_MINUTES: RangeInclusive<u32> = 20..=120;

/// Distance in kilometers, for distance-bearing types only.
pub const DISTANCE_KM: RangeInclusive<f64> = 2.0..=15.0;

/// Calories burned per minute.
pub const CALORIE_FACTOR: RangeInclusive<u32> = 5..=10;

/// Random activity source.
pub struct ActivityGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl ActivityGenerator<ChaCha8Rng> {
    /// Deterministic generator for the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> ActivityGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a random batch of scored activities for one user.
    pub fn generate_for(
        &mut self,
        user: &User,
        logged_at: &str,
    ) -> Result<Vec<Activity>, ValidationError> {
        let count = self.rng.random_range(ACTIVITIES_PER_USER);
        (0..count)
            .map(|_| self.generate_one(user, logged_at))
            .collect()
    }

    /// Generate a single scored activity for a user.
    pub fn generate_one(
        &mut self,
        user: &User,
        logged_at: &str,
    ) -> Result<Activity, ValidationError> {
        let activity_type =
            ActivityType::ALL[self.rng.random_range(0..ActivityType::ALL.len())];
        let duration = self.rng.random_range(DURATION_MINUTES);
        let distance = if activity_type.is_distance_bearing() {
            round_to_hundredths(self.rng.random_range(DISTANCE_KM))
        } else {
            0.0
        };
        let factor = self.rng.random_range(CALORIE_FACTOR);

        let points_earned = scoring::score(activity_type, i64::from(duration), distance)?;

        Ok(Activity {
            id: Builder::from_random_bytes(self.rng.random()).into_uuid().to_string(),
            user_email: user.email.clone(),
            user_name: user.name.clone(),
            activity_type,
            duration,
            distance,
            calories_burned: scoring::calories(duration, factor),
            points_earned,
            date: logged_at.to_string(),
        })
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
