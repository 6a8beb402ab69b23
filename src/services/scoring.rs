// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity scoring.
//!
//! One point per minute, plus one point per full 100 m for the
//! distance-bearing types (Running, Cycling, Walking).

use crate::error::ValidationError;
use crate::models::ActivityType;

/// Points for a single activity.
///
/// Distance is only looked at for distance-bearing types; for the others it
/// is ignored entirely, so any value (even a nonsensical one) is accepted.
pub fn score(
    activity_type: ActivityType,
    duration_minutes: i64,
    distance_km: f64,
) -> Result<u32, ValidationError> {
    if duration_minutes < 0 {
        return Err(ValidationError::NegativeDuration(duration_minutes));
    }
    let duration = u32::try_from(duration_minutes)
        .map_err(|_| ValidationError::DurationOutOfRange(duration_minutes))?;

    if !activity_type.is_distance_bearing() {
        return Ok(duration);
    }

    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(ValidationError::InvalidDistance(distance_km));
    }

    let tenths = (distance_km * 10.0).floor();
    if tenths > f64::from(u32::MAX) {
        return Err(ValidationError::DistanceOutOfRange(distance_km));
    }

    duration
        .checked_add(tenths as u32)
        .ok_or(ValidationError::ScoreOverflow {
            duration,
            distance_km,
        })
}

/// Score an activity whose type is given by display name.
pub fn score_named(
    activity_type: &str,
    duration_minutes: i64,
    distance_km: f64,
) -> Result<u32, ValidationError> {
    score(activity_type.parse()?, duration_minutes, distance_km)
}

/// Calories burned, `duration * factor`. Informational only, never scored.
pub fn calories(duration_minutes: u32, factor: u32) -> u32 {
    duration_minutes.saturating_mul(factor)
}
