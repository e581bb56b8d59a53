// ABOUTME: Error types for unrecognised unit tags, unknown formulas, and invalid configuration
// ABOUTME: Numeric domain failures are reported as Option::None and never reach this module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! The metrics engine has two failure channels:
//!
//! - `Option::None` is returned when a well-typed input is numerically invalid
//!   for the operation (non-positive distance, pace fields out of range, ...).
//!   Callers are expected to check it.
//! - [`MetricsError`] is returned when a tag cannot be recognised at all (a unit
//!   or formula name coming from configuration or user input), or when the
//!   configuration itself is invalid. These are programmer/configuration
//!   errors and are never folded into `None`.

use std::fmt;

use thiserror::Error;

pub use crate::config::ConfigError;

/// Family of unit a tag was expected to belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Length units (meters, kilometers, miles)
    Distance,
    /// Velocity units (m/s, km/h, mph)
    Speed,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance => write!(f, "distance"),
            Self::Speed => write!(f, "speed"),
        }
    }
}

/// Errors produced by the metrics engine
#[derive(Debug, Error)]
pub enum MetricsError {
    /// The unit tag does not match any recognised unit
    #[error("Unsupported {kind} unit: '{value}'")]
    UnsupportedUnit {
        /// Which unit family was being parsed
        kind: UnitKind,
        /// The tag as supplied by the caller
        value: String,
    },

    /// The max heart rate formula name is not recognised
    #[error("Unknown max heart rate formula: '{0}'. Valid options: gellish_al, haskell_fox, gellish_coll")]
    UnknownFormula(String),

    /// The zone method name is not recognised
    #[error("Unknown heart rate zone method: '{0}'. Valid options: karvonen, percent_of_max")]
    UnknownZoneMethod(String),

    /// Configuration could not be loaded or failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl MetricsError {
    /// Unrecognised distance unit tag
    #[must_use]
    pub fn unsupported_distance_unit(value: impl Into<String>) -> Self {
        Self::UnsupportedUnit {
            kind: UnitKind::Distance,
            value: value.into(),
        }
    }

    /// Unrecognised speed unit tag
    #[must_use]
    pub fn unsupported_speed_unit(value: impl Into<String>) -> Self {
        Self::UnsupportedUnit {
            kind: UnitKind::Speed,
            value: value.into(),
        }
    }
}

/// Convenience alias for results carrying a [`MetricsError`]
pub type MetricsResult<T> = Result<T, MetricsError>;
