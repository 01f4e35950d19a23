// ABOUTME: Record validation error types shared by parsing and calculation
// ABOUTME: Every variant carries the offending value for diagnosis from logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Record validation errors.
//!
//! A single enum covers both parse-time failures (wrong field count, bad
//! steps, bad span, unknown activity) and calculation-time failures
//! (non-positive weight or height). Variants keep the offending input so a
//! rejected record can be diagnosed from the log line alone.

use thiserror::Error;

/// Result alias for record parsing and metric calculations
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors produced while parsing a record or deriving metrics from one
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// The record does not have the expected number of comma-separated fields
    #[error("invalid record format {record:?}: expected {expected} comma-separated fields, got {actual}")]
    Format {
        /// Number of fields the record grammar requires
        expected: usize,
        /// Number of fields actually present
        actual: usize,
        /// The raw record that was rejected
        record: String,
    },

    /// The step count is not a positive integer
    #[error("invalid step count {value:?}: must be a positive integer")]
    InvalidSteps {
        /// The offending step field (or formatted value)
        value: String,
    },

    /// The duration is unparseable, zero, or negative
    #[error("invalid duration {value:?}: must be a positive time span")]
    InvalidDuration {
        /// The offending span field (or formatted value)
        value: String,
    },

    /// The weight is not positive
    #[error("invalid weight {value}: must be greater than zero")]
    InvalidWeight {
        /// The rejected weight in kilograms
        value: f64,
    },

    /// The height is not positive
    #[error("invalid height {value}: must be greater than zero")]
    InvalidHeight {
        /// The rejected height in meters
        value: f64,
    },

    /// The activity label is not one of the recognized spellings
    #[error("unknown activity type {label:?}")]
    UnknownActivity {
        /// The unrecognized activity label
        label: String,
    },
}
