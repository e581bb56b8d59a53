// ABOUTME: Configuration module for tunable metrics parameters
// ABOUTME: Re-exports MetricsConfig and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Riegel exponent, pace precision, and heart rate zone table settings
pub mod metrics;

pub use error::ConfigError;
pub use metrics::MetricsConfig;
