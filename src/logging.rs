// ABOUTME: Structured logging setup for applications and tests using the metrics engine
// ABOUTME: Configures log level, output format, and location details for the tracing subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Logging configuration
//!
//! The library only emits `tracing` events; it never installs a subscriber on
//! its own. Host applications that do not already configure `tracing` can call
//! [`LoggingConfig::init`] once at startup.

use std::env;
use std::io;

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Default human-readable format for development
    #[default]
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Reads `RUST_LOG`, `LOG_FORMAT` (`json`, `compact`, otherwise pretty),
    /// `LOG_INCLUDE_LOCATION`, and `LOG_INCLUDE_THREAD`.
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
        }
    }

    /// Filter applied to the subscriber
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        env::var("RUST_LOG").map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new)
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let layer = fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread)
            .with_target(true)
            .with_writer(io::stdout);

        match self.format {
            LogFormat::Json => registry.with(layer.json()).try_init()?,
            LogFormat::Pretty => registry.with(layer).try_init()?,
            LogFormat::Compact => registry.with(layer.compact()).try_init()?,
        }

        tracing::debug!(level = %self.level, format = ?self.format, "logging initialized");
        Ok(())
    }
}
