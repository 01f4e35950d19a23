// ABOUTME: Report rendering for training sessions and daily step totals
// ABOUTME: Hosts the two public string-in/string-out entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Report rendering.
//!
//! The two entry points differ in their error contract. [`training_info`]
//! returns validation errors to the caller. [`day_action_info`] is fed
//! straight from device logs where a bad line must not break the feed: it
//! logs the rejection and returns an empty string instead.

use tracing::warn;

use crate::constants::{gait, units};
use crate::errors::RecordResult;
use crate::metrics::{self, derive_metrics};
use crate::records::{StepRecord, TrainingRecord};
use crate::span;

/// Render a training session report from a `"<steps>,<activity>,<duration>"`
/// record.
///
/// The report lists the activity name, duration in hours, distance in km,
/// mean speed in km/h, and calories burned, each to two decimals.
///
/// # Errors
///
/// Returns the parse or validation error for a malformed record: wrong field
/// count, non-positive steps or span, unknown activity label, or non-positive
/// weight/height. The error is logged before it is returned.
pub fn training_info(record: &str, weight_kg: f64, height_m: f64) -> RecordResult<String> {
    let result = render_training(record, weight_kg, height_m);
    if let Err(err) = &result {
        warn!(error = %err, record, "training record rejected");
    }
    result
}

fn render_training(record: &str, weight_kg: f64, height_m: f64) -> RecordResult<String> {
    let parsed: TrainingRecord = record.parse()?;
    let derived = derive_metrics(
        parsed.activity,
        parsed.steps,
        weight_kg,
        height_m,
        parsed.duration,
    )?;

    let activity = parsed.activity;
    let hours = span::hours(parsed.duration);
    let distance = derived.distance_km;
    let speed = derived.mean_speed_kmh;
    let calories = derived.calories_kcal;
    Ok(format!(
        "Training type: {activity}\nDuration: {hours:.2} h.\nDistance: {distance:.2} km.\nSpeed: {speed:.2} km/h\nCalories burned: {calories:.2}\n"
    ))
}

/// Render a daily step report from a `"<steps>,<duration>"` record.
///
/// Distance uses the fixed [`gait::DAY_STEP_LENGTH_M`] step length; the
/// calorie estimate reuses the walking formula with the caller's
/// weight/height. Returns an empty string on any parse or calculation
/// failure — the rejection is logged with the offending record, never
/// propagated.
#[must_use]
pub fn day_action_info(record: &str, weight_kg: f64, height_m: f64) -> String {
    match render_day(record, weight_kg, height_m) {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, record, "step record rejected");
            String::new()
        }
    }
}

fn render_day(record: &str, weight_kg: f64, height_m: f64) -> RecordResult<String> {
    let parsed: StepRecord = record.parse()?;

    let distance = f64::from(parsed.steps) * gait::DAY_STEP_LENGTH_M / units::METERS_PER_KM;
    let calories = metrics::walking_calories(parsed.steps, weight_kg, height_m, parsed.duration)?;

    let steps = parsed.steps;
    Ok(format!(
        "Step count: {steps}.\nThe distance was {distance:.2} km.\nYou burned {calories:.2} kcal.\n"
    ))
}
