// ABOUTME: Main library entry point for the stride training metrics crate
// ABOUTME: Parses step-tracker records and renders derived-metric reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

#![deny(unsafe_code)]

//! # Stride
//!
//! A small calculation-and-formatting library for step-tracker data: parse a
//! comma-separated activity record, derive distance, mean speed, and calories
//! burned, and render the result as a human-readable report.
//!
//! Two record grammars are supported:
//!
//! - **Training records** — `"<steps>,<activity>,<duration>"`, e.g.
//!   `"5000,Running,1h30m"`. Rendered by [`report::training_info`], which
//!   propagates validation errors to the caller.
//! - **Daily step records** — `"<steps>,<duration>"`, e.g. `"8000,2h15m"`.
//!   Rendered by [`report::day_action_info`], which logs failures and returns
//!   an empty string instead of an error.
//!
//! The parsing and calculation layers underneath ([`records`], [`span`],
//! [`metrics`]) are public, so embedding applications can work with typed
//! values instead of rendered text.
//!
//! ## Example
//!
//! ```
//! use stride::report::{day_action_info, training_info};
//!
//! let training = training_info("5000,Walking,1h", 72.0, 1.75).expect("valid record");
//! assert!(training.starts_with("Training type: Walking"));
//!
//! let day = day_action_info("5000,55m", 72.0, 1.75);
//! assert!(day.starts_with("Step count: 5000."));
//! ```

/// Unit-conversion and gait/calorie coefficients used by the formulas
pub mod constants;

/// Record validation errors and the crate-wide result alias
pub mod errors;

/// Opt-in `tracing` subscriber setup for embedding applications
pub mod logging;

/// Distance, mean speed, and calorie calculations
pub mod metrics;

/// Record grammars: activity labels, training records, step records
pub mod records;

/// Report rendering and the two public reporting entry points
pub mod report;

/// Duration span parsing (`"1h30m"`) and float views of a span
pub mod span;
