// ABOUTME: Parser for duration span literals such as "1h30m" or "-90s"
// ABOUTME: Also provides the float hour/minute views used by the formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Duration span parsing.
//!
//! Records encode durations as compact span literals: an optional sign
//! followed by one or more `<decimal><unit>` groups, e.g. `"1h30m"`,
//! `"0h10m"`, `"1.5h"`, `"-90s"`. Supported units are `ns`, `us`/`µs`, `ms`,
//! `s`, `m`, and `h`; a bare `"0"` is a valid zero span. The result is
//! signed — negative spans parse successfully and are rejected later by
//! record validation, keeping the parse/validate split intact.

use chrono::Duration;

use crate::errors::{RecordError, RecordResult};

/// Nanoseconds represented by one unit of the given suffix
fn unit_nanos(unit: &str) -> Option<f64> {
    match unit {
        "ns" => Some(1.0),
        "us" | "µs" => Some(1_000.0),
        "ms" => Some(1_000_000.0),
        "s" => Some(1_000_000_000.0),
        "m" => Some(60_000_000_000.0),
        "h" => Some(3_600_000_000_000.0),
        _ => None,
    }
}

fn invalid(text: &str) -> RecordError {
    RecordError::InvalidDuration {
        value: text.to_owned(),
    }
}

/// Parse a span literal into a signed [`Duration`].
///
/// Accepts an optional leading `+`/`-`, then one or more `<decimal><unit>`
/// groups; `"0"` alone denotes the zero span. A bare number without a unit is
/// rejected. Spans beyond roughly ±292 years saturate.
///
/// # Errors
///
/// Returns [`RecordError::InvalidDuration`] carrying the full offending text
/// when the literal does not match the span grammar.
pub fn parse(text: &str) -> RecordResult<Duration> {
    let mut rest = text;
    let mut sign = 1.0_f64;
    if let Some(tail) = rest.strip_prefix('-') {
        sign = -1.0;
        rest = tail;
    } else if let Some(tail) = rest.strip_prefix('+') {
        rest = tail;
    }

    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(invalid(text));
    }

    let mut total_nanos = 0.0_f64;
    while !rest.is_empty() {
        // Digits (with an optional fraction) up to the unit suffix. A group
        // with no suffix at all is malformed.
        let number_end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .ok_or_else(|| invalid(text))?;
        let (number, tail) = rest.split_at(number_end);
        let value: f64 = number.parse().map_err(|_| invalid(text))?;

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);
        let nanos = unit_nanos(unit).ok_or_else(|| invalid(text))?;

        total_nanos += value * nanos;
        rest = next;
    }

    Ok(Duration::nanoseconds((sign * total_nanos) as i64))
}

fn seconds(span: Duration) -> f64 {
    span.num_nanoseconds().map_or_else(
        || span.num_milliseconds() as f64 / 1_000.0,
        |nanos| nanos as f64 / 1_000_000_000.0,
    )
}

/// The span expressed in fractional hours
#[must_use]
pub fn hours(span: Duration) -> f64 {
    seconds(span) / 3_600.0
}

/// The span expressed in fractional minutes
#[must_use]
pub fn minutes(span: Duration) -> f64 {
    seconds(span) / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compound_spans() {
        assert_eq!(parse("1h30m"), Ok(Duration::minutes(90)));
        assert_eq!(parse("0h10m"), Ok(Duration::minutes(10)));
        assert_eq!(parse("2h45m30s"), Ok(Duration::seconds(9930)));
    }

    #[test]
    fn parses_single_unit_spans() {
        assert_eq!(parse("90m"), Ok(Duration::minutes(90)));
        assert_eq!(parse("300ms"), Ok(Duration::milliseconds(300)));
        assert_eq!(parse("250us"), Ok(Duration::microseconds(250)));
        assert_eq!(parse("250µs"), Ok(Duration::microseconds(250)));
    }

    #[test]
    fn parses_fractional_values() {
        assert_eq!(parse("1.5h"), Ok(Duration::minutes(90)));
        assert_eq!(parse("0.5m"), Ok(Duration::seconds(30)));
    }

    #[test]
    fn parses_signed_spans() {
        assert_eq!(parse("-10m"), Ok(Duration::minutes(-10)));
        assert_eq!(parse("-1h30m"), Ok(Duration::minutes(-90)));
        assert_eq!(parse("+45s"), Ok(Duration::seconds(45)));
    }

    #[test]
    fn parses_bare_zero() {
        assert_eq!(parse("0"), Ok(Duration::zero()));
        assert_eq!(parse("-0"), Ok(Duration::zero()));
    }

    #[test]
    fn rejects_malformed_spans() {
        for bad in ["", "10", "h", "10x", "1h30", "ten minutes", "--5m", "1h 30m"] {
            let err = parse(bad).expect_err("span must be rejected");
            assert_eq!(
                err,
                RecordError::InvalidDuration {
                    value: bad.to_owned()
                }
            );
        }
    }

    #[test]
    fn float_views_match_span_length() {
        let span = Duration::minutes(90);
        assert!((hours(span) - 1.5).abs() < f64::EPSILON);
        assert!((minutes(span) - 90.0).abs() < f64::EPSILON);
        assert!(hours(Duration::zero()).abs() < f64::EPSILON);
    }
}
