// ABOUTME: Distance, mean speed, and calorie formulas shared by both reports
// ABOUTME: Validates physical inputs and exposes the derived-metrics triple
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Derived metric calculations.
//!
//! One shared physics module consumed by both report surfaces. Distance comes
//! from a height-based step-length estimate, mean speed divides distance by
//! the span length, and the calorie burn scales weight by speed and time with
//! a per-activity coefficient. Calorie functions validate all physical inputs
//! and refuse non-positive values; the pure distance/speed helpers guard the
//! division instead of erroring.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::constants::{gait, units};
use crate::errors::{RecordError, RecordResult};
use crate::records::Activity;
use crate::span;

/// The computed metric triple for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Distance covered, in kilometers
    pub distance_km: f64,
    /// Mean speed over the session, in km/h
    pub mean_speed_kmh: f64,
    /// Estimated calorie burn, in kcal
    pub calories_kcal: f64,
}

/// Distance covered in kilometers, from a height-based step length.
///
/// Step length is estimated as `height_m` x
/// [`gait::STEP_LENGTH_COEFFICIENT`] meters.
#[must_use]
pub fn distance_km(steps: u32, height_m: f64) -> f64 {
    let step_length_m = height_m * gait::STEP_LENGTH_COEFFICIENT;
    f64::from(steps) * step_length_m / units::METERS_PER_KM
}

/// Mean speed in km/h over the given span.
///
/// Returns `0.0` for zero and negative spans rather than dividing by a
/// non-positive length.
#[must_use]
pub fn mean_speed_kmh(steps: u32, height_m: f64, duration: Duration) -> f64 {
    if duration <= Duration::zero() {
        return 0.0;
    }
    distance_km(steps, height_m) / span::hours(duration)
}

/// Validate the physical inputs shared by both calorie formulas
fn validate_inputs(steps: u32, weight_kg: f64, height_m: f64, duration: Duration) -> RecordResult<()> {
    if steps == 0 {
        return Err(RecordError::InvalidSteps {
            value: steps.to_string(),
        });
    }
    if weight_kg <= 0.0 {
        return Err(RecordError::InvalidWeight { value: weight_kg });
    }
    if height_m <= 0.0 {
        return Err(RecordError::InvalidHeight { value: height_m });
    }
    if duration <= Duration::zero() {
        return Err(RecordError::InvalidDuration {
            value: duration.to_string(),
        });
    }
    Ok(())
}

/// Base calorie formula scaled by the activity coefficient
fn spent_calories(
    activity: Activity,
    steps: u32,
    weight_kg: f64,
    height_m: f64,
    duration: Duration,
) -> RecordResult<f64> {
    validate_inputs(steps, weight_kg, height_m, duration)?;

    let speed_kmh = mean_speed_kmh(steps, height_m, duration);
    let base = weight_kg * speed_kmh * span::minutes(duration) / units::MINUTES_PER_HOUR;
    Ok(base * activity.calorie_coefficient())
}

/// Calories burned walking.
///
/// Formula: `(weight_kg x mean speed x minutes / 60) x 0.5`.
///
/// # Errors
///
/// Returns the matching validation error when any input is non-positive:
/// [`RecordError::InvalidSteps`], [`RecordError::InvalidWeight`],
/// [`RecordError::InvalidHeight`], or [`RecordError::InvalidDuration`].
pub fn walking_calories(
    steps: u32,
    weight_kg: f64,
    height_m: f64,
    duration: Duration,
) -> RecordResult<f64> {
    spent_calories(Activity::Walking, steps, weight_kg, height_m, duration)
}

/// Calories burned running.
///
/// Formula: `weight_kg x mean speed x minutes / 60` — the unscaled base.
///
/// # Errors
///
/// Same validation errors as [`walking_calories`].
pub fn running_calories(
    steps: u32,
    weight_kg: f64,
    height_m: f64,
    duration: Duration,
) -> RecordResult<f64> {
    spent_calories(Activity::Running, steps, weight_kg, height_m, duration)
}

/// Compute the full metric triple for one parsed session.
///
/// # Errors
///
/// Propagates the validation errors of the calorie formula for the given
/// `activity`.
pub fn derive_metrics(
    activity: Activity,
    steps: u32,
    weight_kg: f64,
    height_m: f64,
    duration: Duration,
) -> RecordResult<DerivedMetrics> {
    let calories_kcal = match activity {
        Activity::Walking => walking_calories(steps, weight_kg, height_m, duration)?,
        Activity::Running => running_calories(steps, weight_kg, height_m, duration)?,
    };

    Ok(DerivedMetrics {
        distance_km: distance_km(steps, height_m),
        mean_speed_kmh: mean_speed_kmh(steps, height_m, duration),
        calories_kcal,
    })
}
