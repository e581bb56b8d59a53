// ABOUTME: Main library entry point for the endurance metrics conversion engine
// ABOUTME: Distance, speed, pace, time, elevation, and heart rate formulas for endurance sports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Endurance Metrics
//!
//! Unit conversions and physiological formulas for endurance-sport metrics.
//! Every function is a pure computation over its arguments.
//!
//! ## Modules
//!
//! - **units**: `DistanceUnit`, `SpeedUnit` and unit-tagged `Distance`/`Speed` values
//! - **distance** / **speed**: conversions routed through meters and meters per second
//! - **pace**: minutes:seconds per unit distance and its conversions
//! - **time**: elapsed time, race time, Riegel prediction, split times
//! - **elevation**: slope and elevation change
//! - **`heart_rate`**: max heart rate formulas and heart rate zones
//! - **config**: tunable parameters loaded from the environment
//!
//! ## Failure channels
//!
//! Numerically invalid inputs (a non-positive distance, a pace of `0:00`, ...)
//! give `None`. Unrecognised unit or formula names give a [`MetricsError`].
//!
//! ## Example
//!
//! ```rust
//! use endurance_metrics::time::{time_prediction_riegel, Time};
//! use endurance_metrics::DistanceUnit;
//!
//! let ten_k = Time::new(0, 40, 0);
//! let five_k = time_prediction_riegel(
//!     &ten_k,
//!     10.0,
//!     DistanceUnit::Kilometers,
//!     5000.0,
//!     Some(DistanceUnit::Meters),
//! );
//! assert_eq!(five_k, Some(Time::new(0, 19, 11)));
//! ```

/// Conversion factors and formula coefficients
pub mod constants;

/// Error types for unrecognised tags and invalid configuration
pub mod errors;

/// Unit tags and unit-tagged values
pub mod units;

/// Distance conversions
pub mod distance;

/// Speed conversions
pub mod speed;

/// Pace conversions
pub mod pace;

/// Time, race time, prediction, and split calculations
pub mod time;

/// Slope and elevation
pub mod elevation;

/// Maximum heart rate and heart rate zones
pub mod heart_rate;

/// Tunable metrics configuration
pub mod config;

/// Tracing subscriber setup
pub mod logging;

pub use config::{ConfigError, MetricsConfig};
pub use errors::{MetricsError, MetricsResult, UnitKind};
pub use heart_rate::{
    HeartRateZone, HeartRateZoneMethod, HeartRateZoneRange, MaxHeartRateFormula,
};
pub use pace::Pace;
pub use time::Time;
pub use units::{Distance, DistanceUnit, Speed, SpeedUnit};
