// ABOUTME: Record grammars for training and daily step log entries
// ABOUTME: Activity labels resolve to a closed enum at parse time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Record parsing.
//!
//! Two comma-separated grammars cover the log formats:
//!
//! - [`TrainingRecord`]: `"<steps>,<activity>,<duration>"`
//! - [`StepRecord`]: `"<steps>,<duration>"`
//!
//! A record is accepted wholesale or rejected wholesale: every field must be
//! present and valid. Steps must be a positive integer; the duration span
//! must be strictly positive (zero and negative spans are both rejected); the
//! activity label must resolve to a known [`Activity`]. Label resolution
//! happens here, once, so the calculation layer dispatches on a closed enum
//! instead of re-checking strings.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::constants::calories;
use crate::errors::{RecordError, RecordResult};
use crate::span;

/// Activity type of a training session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    /// Walking session
    Walking,
    /// Running session
    Running,
}

impl Activity {
    /// Canonical display label for this activity
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Walking => "Walking",
            Self::Running => "Running",
        }
    }

    /// Scaling factor applied to the base calorie formula for this activity
    ///
    /// Running is the unscaled base; walking burns half of it.
    #[must_use]
    pub const fn calorie_coefficient(self) -> f64 {
        match self {
            Self::Walking => calories::WALKING_COEFFICIENT,
            Self::Running => 1.0,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activity {
    type Err = RecordError;

    /// Accepts the canonical English labels plus the legacy dataset
    /// spellings still present in older exports.
    fn from_str(label: &str) -> RecordResult<Self> {
        match label {
            "Walking" | "Ходьба" => Ok(Self::Walking),
            "Running" | "Бег" => Ok(Self::Running),
            _ => Err(RecordError::UnknownActivity {
                label: label.to_owned(),
            }),
        }
    }
}

/// One parsed training log entry: steps, activity, duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingRecord {
    /// Number of steps taken during the session
    pub steps: u32,
    /// Activity type of the session
    pub activity: Activity,
    /// Session duration, strictly positive
    pub duration: Duration,
}

/// One parsed daily step log entry: steps and duration, activity implied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    /// Number of steps taken
    pub steps: u32,
    /// Walk duration, strictly positive
    pub duration: Duration,
}

/// Parse a step field into a positive count
fn parse_steps(field: &str) -> RecordResult<u32> {
    let steps: u32 = field.parse().map_err(|_| RecordError::InvalidSteps {
        value: field.to_owned(),
    })?;
    if steps == 0 {
        return Err(RecordError::InvalidSteps {
            value: field.to_owned(),
        });
    }
    Ok(steps)
}

/// Parse a duration field and reject zero and negative spans
fn parse_positive_span(field: &str) -> RecordResult<Duration> {
    let duration = span::parse(field)?;
    if duration <= Duration::zero() {
        return Err(RecordError::InvalidDuration {
            value: field.to_owned(),
        });
    }
    Ok(duration)
}

impl FromStr for TrainingRecord {
    type Err = RecordError;

    fn from_str(record: &str) -> RecordResult<Self> {
        let parts: Vec<&str> = record.split(',').collect();
        if parts.len() != 3 {
            return Err(RecordError::Format {
                expected: 3,
                actual: parts.len(),
                record: record.to_owned(),
            });
        }

        let steps = parse_steps(parts[0])?;
        let duration = parse_positive_span(parts[2])?;
        let activity = parts[1].parse()?;

        Ok(Self {
            steps,
            activity,
            duration,
        })
    }
}

impl FromStr for StepRecord {
    type Err = RecordError;

    fn from_str(record: &str) -> RecordResult<Self> {
        let parts: Vec<&str> = record.split(',').collect();
        if parts.len() != 2 {
            return Err(RecordError::Format {
                expected: 2,
                actual: parts.len(),
                record: record.to_owned(),
            });
        }

        let steps = parse_steps(parts[0])?;
        let duration = parse_positive_span(parts[1])?;

        Ok(Self { steps, duration })
    }
}
