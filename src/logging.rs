// ABOUTME: Opt-in tracing subscriber setup for applications embedding the crate
// ABOUTME: Env-filter driven with pretty, compact, and JSON output formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Logging setup.
//!
//! The library itself only emits `tracing` events (rejected records are
//! logged before being swallowed or returned) and never installs a global
//! subscriber. Applications that do not already configure `tracing` can call
//! [`LoggingConfig::init`] to get an env-filter driven subscriber with a
//! format suited to their environment.

use std::env;
use std::io;

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Log output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    #[default]
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a format name (case-insensitive); unrecognized values fall back
    /// to `Pretty`.
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive used when `RUST_LOG` is unset
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG` for the level directive, `LOG_FORMAT` for the output
    /// format, and `LOG_INCLUDE_LOCATION` to toggle file/line fields.
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = env::var("LOG_FORMAT")
            .map(|value| LogFormat::from_str_param(&value))
            .unwrap_or_default();

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> Result<(), TryInitError> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .json();
                registry.with(layer).try_init()
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout);
                registry.with(layer).try_init()
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(false)
                    .with_writer(io::stdout)
                    .compact();
                registry.with(layer).try_init()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parse_falls_back_to_pretty() {
        assert!(matches!(LogFormat::from_str_param("json"), LogFormat::Json));
        assert!(matches!(
            LogFormat::from_str_param("COMPACT"),
            LogFormat::Compact
        ));
        assert!(matches!(
            LogFormat::from_str_param("anything"),
            LogFormat::Pretty
        ));
    }

    #[test]
    fn default_config_is_pretty_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(matches!(config.format, LogFormat::Pretty));
        assert!(!config.include_location);
    }
}
