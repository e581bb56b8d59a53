// ABOUTME: Configuration error types for metrics configuration loading and validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and malformed zone tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Invalid range for {field}: {reason}")]
    InvalidRange {
        /// Configuration field name
        field: &'static str,
        /// Accepted range, human readable
        reason: String,
    },

    /// Failed to parse configuration value
    #[error("Parse error for {variable}: could not read '{value}'")]
    Parse {
        /// Environment variable being read
        variable: &'static str,
        /// Raw value that failed to parse
        value: String,
    },

    /// Heart rate zone boundaries are not usable as a zone table
    #[error("Invalid heart rate zone table: {0}")]
    InvalidZoneTable(&'static str),
}
