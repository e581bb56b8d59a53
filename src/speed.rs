// ABOUTME: Speed conversions between meters per second, kilometers per hour, and miles per hour
// ABOUTME: Unit-tagged dispatch, speed to pace, and average speed from distance and time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Speed conversions
//!
//! Mirrors [`crate::distance`]: every unit-tagged conversion is routed through
//! meters per second.

use tracing::debug;

use crate::constants::distance::{KILOMETERS_IN_MILE, METERS_IN_KILOMETER, METERS_IN_MILE};
use crate::constants::time::{MINUTES_IN_HOUR, SECONDS_IN_HOUR, SECONDS_IN_MINUTE};
use crate::distance::distance_to_meters;
use crate::errors::MetricsResult;
use crate::pace::Pace;
use crate::time::{time_to_seconds, Time};
use crate::units::{DistanceUnit, SpeedUnit};

/// Convert meters per second to kilometers per hour
#[must_use]
pub fn meters_per_second_to_kilometers_per_hour(speed: f64) -> f64 {
    (speed * SECONDS_IN_HOUR) / METERS_IN_KILOMETER
}

/// Convert meters per second to miles per hour
#[must_use]
pub fn meters_per_second_to_miles_per_hour(speed: f64) -> f64 {
    (speed * SECONDS_IN_HOUR) / METERS_IN_MILE
}

/// Convert kilometers per hour to miles per hour
#[must_use]
pub fn kilometers_per_hour_to_miles_per_hour(speed: f64) -> f64 {
    speed / KILOMETERS_IN_MILE
}

/// Convert kilometers per hour to meters per second
#[must_use]
pub fn kilometers_per_hour_to_meters_per_second(speed: f64) -> f64 {
    (speed * METERS_IN_KILOMETER) / SECONDS_IN_HOUR
}

/// Convert miles per hour to kilometers per hour
#[must_use]
pub fn miles_per_hour_to_kilometers_per_hour(speed: f64) -> f64 {
    speed * KILOMETERS_IN_MILE
}

/// Convert miles per hour to meters per second
#[must_use]
pub fn miles_per_hour_to_meters_per_second(speed: f64) -> f64 {
    (speed * METERS_IN_MILE) / SECONDS_IN_HOUR
}

/// Express a speed given in `unit` in meters per second
#[must_use]
pub fn speed_to_meters_per_second(speed: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::MetersPerSecond => speed,
        SpeedUnit::KilometersPerHour => kilometers_per_hour_to_meters_per_second(speed),
        SpeedUnit::MilesPerHour => miles_per_hour_to_meters_per_second(speed),
    }
}

/// Express a speed given in meters per second in `unit`
#[must_use]
pub fn meters_per_second_to_speed(speed: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::MetersPerSecond => speed,
        SpeedUnit::KilometersPerHour => meters_per_second_to_kilometers_per_hour(speed),
        SpeedUnit::MilesPerHour => meters_per_second_to_miles_per_hour(speed),
    }
}

/// Convert a speed from `unit` to `to_unit`
#[must_use]
pub fn convert_speed(speed: f64, unit: SpeedUnit, to_unit: SpeedUnit) -> f64 {
    meters_per_second_to_speed(speed_to_meters_per_second(speed, unit), to_unit)
}

/// Convert a speed between units named by string tags
///
/// Accepts unit names or symbols (`"m/s"`, `"kph"`, `"miles_per_hour"`, ...).
///
/// # Errors
///
/// Returns `MetricsError::UnsupportedUnit` if either tag is not a recognised speed unit
pub fn try_convert_speed(speed: f64, unit: &str, to_unit: &str) -> MetricsResult<f64> {
    let from: SpeedUnit = unit.parse()?;
    let to: SpeedUnit = to_unit.parse()?;
    Ok(convert_speed(speed, from, to))
}

/// Convert a speed to a pace
///
/// A speed in km/h gives minutes:seconds per kilometer, a speed in mph gives
/// minutes:seconds per mile. Both fields are truncated, so the pace is never
/// slower than the true value.
///
/// Returns `None` if the speed is not positive.
///
/// # Example
///
/// ```rust
/// use endurance_metrics::speed::speed_to_pace;
///
/// let pace = speed_to_pace(11.0).unwrap();
/// assert_eq!((pace.minutes, pace.seconds), (5, 27));
/// ```
#[must_use]
pub fn speed_to_pace(speed: f64) -> Option<Pace> {
    if speed <= 0.0 {
        return None;
    }

    let minutes_per_unit = MINUTES_IN_HOUR / speed;
    let minutes = minutes_per_unit.floor();
    let seconds = ((minutes_per_unit - minutes) * SECONDS_IN_MINUTE).floor();

    Some(Pace::new(minutes as i32, seconds as i32))
}

/// Average speed over a distance covered in an elapsed time
///
/// `to_unit` defaults to meters per second.
///
/// Returns `None` if the time is not a positive duration or the distance is
/// negative. A distance of exactly zero gives a speed of zero.
#[must_use]
pub fn calculate_speed(
    distance: f64,
    distance_unit: DistanceUnit,
    time: &Time,
    to_unit: Option<SpeedUnit>,
) -> Option<f64> {
    let seconds = time_to_seconds(time)?;
    if distance < 0.0 {
        debug!(distance, "negative distance has no average speed");
        return None;
    }
    if distance == 0.0 {
        return Some(0.0);
    }

    let meters_per_second = distance_to_meters(distance, distance_unit) / seconds as f64;
    Some(meters_per_second_to_speed(
        meters_per_second,
        to_unit.unwrap_or_default(),
    ))
}
