// ABOUTME: Distance conversions between meters, kilometers, and miles
// ABOUTME: Unit-tagged dispatch through meters and distance covered at a speed over a time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Distance conversions
//!
//! Every unit-tagged conversion is routed through meters so that converting
//! `U -> V -> W` gives the same result as `U -> W` up to floating-point precision.
//! The plain conversions accept any real number (including negatives); range
//! checking is left to the caller.

use tracing::debug;

use crate::constants::distance::{KILOMETERS_IN_MILE, METERS_IN_KILOMETER, METERS_IN_MILE};
use crate::errors::MetricsResult;
use crate::speed::speed_to_meters_per_second;
use crate::time::{time_to_seconds, Time};
use crate::units::{DistanceUnit, SpeedUnit};

/// Convert meters to kilometers
#[must_use]
pub fn meters_to_kilometers(meters: f64) -> f64 {
    meters / METERS_IN_KILOMETER
}

/// Convert meters to miles
#[must_use]
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_IN_MILE
}

/// Convert kilometers to meters
#[must_use]
pub fn kilometers_to_meters(kilometers: f64) -> f64 {
    kilometers * METERS_IN_KILOMETER
}

/// Convert kilometers to miles
#[must_use]
pub fn kilometers_to_miles(kilometers: f64) -> f64 {
    kilometers / KILOMETERS_IN_MILE
}

/// Convert miles to kilometers
#[must_use]
pub fn miles_to_kilometers(miles: f64) -> f64 {
    miles * KILOMETERS_IN_MILE
}

/// Convert miles to meters
#[must_use]
pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_IN_MILE
}

/// Express a distance given in `unit` in meters
#[must_use]
pub fn distance_to_meters(distance: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Meters => distance,
        DistanceUnit::Kilometers => kilometers_to_meters(distance),
        DistanceUnit::Miles => miles_to_meters(distance),
    }
}

/// Express a distance given in meters in `unit`
#[must_use]
pub fn meters_to_distance(meters: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Meters => meters,
        DistanceUnit::Kilometers => meters_to_kilometers(meters),
        DistanceUnit::Miles => meters_to_miles(meters),
    }
}

/// Convert a distance from `unit` to `to_unit`
///
/// No rounding is applied; the caller controls precision.
///
/// # Example
///
/// ```rust
/// use endurance_metrics::distance::convert_distance;
/// use endurance_metrics::DistanceUnit;
///
/// let miles = convert_distance(1000.0, DistanceUnit::Meters, DistanceUnit::Miles);
/// assert_eq!(format!("{miles:.4}"), "0.6214");
/// ```
#[must_use]
pub fn convert_distance(distance: f64, unit: DistanceUnit, to_unit: DistanceUnit) -> f64 {
    meters_to_distance(distance_to_meters(distance, unit), to_unit)
}

/// Convert a distance between units named by string tags
///
/// Accepts unit names or symbols (`"m"`, `"kilometers"`, `"mi"`, ...).
///
/// # Errors
///
/// Returns `MetricsError::UnsupportedUnit` if either tag is not a recognised distance unit
pub fn try_convert_distance(distance: f64, unit: &str, to_unit: &str) -> MetricsResult<f64> {
    let from: DistanceUnit = unit.parse()?;
    let to: DistanceUnit = to_unit.parse()?;
    Ok(convert_distance(distance, from, to))
}

/// Distance covered at a constant speed over an elapsed time
///
/// `to_unit` defaults to meters.
///
/// Returns `None` if the speed is negative or the time is not a positive duration.
/// A speed of exactly zero covers no distance.
#[must_use]
pub fn calculate_distance(
    speed: f64,
    speed_unit: SpeedUnit,
    time: &Time,
    to_unit: Option<DistanceUnit>,
) -> Option<f64> {
    if speed < 0.0 {
        debug!(speed, "negative speed has no covered distance");
        return None;
    }

    let seconds = time_to_seconds(time)?;
    if speed == 0.0 {
        return Some(0.0);
    }

    let meters = speed_to_meters_per_second(speed, speed_unit) * seconds as f64;
    Some(meters_to_distance(meters, to_unit.unwrap_or_default()))
}
