// ABOUTME: Unit-conversion and gait constants used by the metric formulas
// ABOUTME: Single source of truth for step length, calorie, and unit coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Calculation constants.
//!
//! Every coefficient the formulas depend on lives here; nothing is tunable at
//! runtime. Grouped by concern so call sites read as
//! `gait::STEP_LENGTH_COEFFICIENT` rather than a bare number.

/// Unit conversions
pub mod units {
    /// Meters in one kilometer
    pub const METERS_PER_KM: f64 = 1000.0;

    /// Minutes in one hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Gait model constants for estimating distance from a step count
pub mod gait {
    /// Step length as a fraction of body height
    ///
    /// A common anthropometric heuristic: one step covers roughly 45% of the
    /// walker's height. Used by the training report, where the user's height
    /// is known.
    pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;

    /// Fixed average step length in meters
    ///
    /// Used by the daily step report, which estimates distance without
    /// consulting height. Kept distinct from the height-based model above;
    /// the two reports intentionally disagree on step length.
    pub const DAY_STEP_LENGTH_M: f64 = 0.65;
}

/// Calorie model constants
pub mod calories {
    /// Scaling factor applied to the walking calorie burn
    ///
    /// Walking burns roughly half the calories of running at the same mean
    /// speed; running uses the unscaled base formula.
    pub const WALKING_COEFFICIENT: f64 = 0.5;
}
