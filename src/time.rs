// ABOUTME: Elapsed time value type and race-time calculations built on distance and speed
// ABOUTME: Time to seconds, race time at constant speed, Riegel prediction, and split times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Time utilities
//!
//! All calculations work in base units (meters, meters per second, seconds)
//! and decompose the resulting duration into whole hours, minutes, and
//! seconds, truncating any fractional second.

use std::iter;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::prediction::RIEGEL_EXPONENT;
use crate::constants::time::{SECONDS_IN_HOUR, SECONDS_IN_MINUTE};
use crate::distance::distance_to_meters;
use crate::speed::speed_to_meters_per_second;
use crate::units::{DistanceUnit, SpeedUnit};

/// Relative tolerance applied when counting splits so that a total distance
/// that is an exact multiple of the split distance, up to rounding in the unit
/// conversion, does not gain an empty trailing split
const SPLIT_COUNT_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Most split entries a single call will produce
pub const MAX_SPLIT_COUNT: usize = 1_000_000;

/// Elapsed duration as hours, minutes, and seconds
///
/// Fields are not bounded on construction. Values produced by this module are
/// always normalised with minutes and seconds in `0..60`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Time {
    /// Whole hours
    pub hours: i64,
    /// Whole minutes
    pub minutes: i64,
    /// Whole seconds
    pub seconds: i64,
}

impl Time {
    /// Create a time from hours, minutes, and seconds
    #[must_use]
    pub const fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Floor-decompose a non-negative number of seconds
    fn from_seconds_unchecked(total_seconds: f64) -> Self {
        let hours = (total_seconds / SECONDS_IN_HOUR).floor();
        let minutes = ((total_seconds % SECONDS_IN_HOUR) / SECONDS_IN_MINUTE).floor();
        let seconds = (total_seconds % SECONDS_IN_MINUTE).floor();

        Self::new(hours as i64, minutes as i64, seconds as i64)
    }
}

/// Total number of seconds in `time`
///
/// Returns `None` if the total is not positive.
#[must_use]
pub fn time_to_seconds(time: &Time) -> Option<i64> {
    let total = time
        .hours
        .checked_mul(3_600)?
        .checked_add(time.minutes.checked_mul(60)?)?
        .checked_add(time.seconds)?;

    if total <= 0 {
        debug!(?time, "elapsed time must be a positive duration");
        return None;
    }
    Some(total)
}

/// Decompose a number of seconds into a normalised [`Time`]
///
/// Returns `None` if `seconds` is negative or not finite. Zero gives the zero
/// time.
#[must_use]
pub fn seconds_to_time(seconds: f64) -> Option<Time> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    if seconds == 0.0 {
        return Some(Time::default());
    }
    Some(Time::from_seconds_unchecked(seconds))
}

/// Time needed to cover `distance` at a constant `speed`
///
/// Returns `None` if either value is not positive.
///
/// # Example
///
/// ```rust
/// use endurance_metrics::time::{calculate_race_time, Time};
/// use endurance_metrics::{DistanceUnit, SpeedUnit};
///
/// let time = calculate_race_time(10.0, DistanceUnit::Kilometers, 5.0, SpeedUnit::KilometersPerHour);
/// assert_eq!(time, Some(Time::new(2, 0, 0)));
/// ```
#[must_use]
pub fn calculate_race_time(
    distance: f64,
    distance_unit: DistanceUnit,
    speed: f64,
    speed_unit: SpeedUnit,
) -> Option<Time> {
    if distance <= 0.0 || speed <= 0.0 {
        return None;
    }

    let meters = distance_to_meters(distance, distance_unit);
    let meters_per_second = speed_to_meters_per_second(speed, speed_unit);

    seconds_to_time(meters / meters_per_second)
}

/// Predict a race time from an achieved performance using Riegel's formula
///
/// `predicted = achieved x (predicted_distance / achieved_distance)^1.06`
///
/// `predicted_unit` defaults to `achieved_unit`.
///
/// Returns `None` if either distance is not positive or the achieved time is
/// not a positive duration.
#[must_use]
pub fn time_prediction_riegel(
    achieved_time: &Time,
    achieved_distance: f64,
    achieved_unit: DistanceUnit,
    predicted_distance: f64,
    predicted_unit: Option<DistanceUnit>,
) -> Option<Time> {
    time_prediction_riegel_with_exponent(
        achieved_time,
        achieved_distance,
        achieved_unit,
        predicted_distance,
        predicted_unit,
        RIEGEL_EXPONENT,
    )
}

/// Riegel prediction with an explicit fatigue exponent
///
/// Same contract as [`time_prediction_riegel`]; use with
/// [`crate::config::MetricsConfig::riegel_exponent`] for a tuned exponent.
#[must_use]
pub fn time_prediction_riegel_with_exponent(
    achieved_time: &Time,
    achieved_distance: f64,
    achieved_unit: DistanceUnit,
    predicted_distance: f64,
    predicted_unit: Option<DistanceUnit>,
    exponent: f64,
) -> Option<Time> {
    if achieved_distance <= 0.0 || predicted_distance <= 0.0 {
        return None;
    }

    let achieved_seconds = time_to_seconds(achieved_time)? as f64;
    let achieved_meters = distance_to_meters(achieved_distance, achieved_unit);
    let predicted_meters =
        distance_to_meters(predicted_distance, predicted_unit.unwrap_or(achieved_unit));

    let distance_ratio = predicted_meters / achieved_meters;
    seconds_to_time(achieved_seconds * distance_ratio.powf(exponent))
}

/// Elapsed times at each split when covering `distance` at a constant `speed`
///
/// One entry is emitted for every whole `split_distance`, followed by a final
/// entry for the exact total distance, so the result has
/// `ceil(distance / split_distance)` entries and the last one is always the
/// total elapsed time.
///
/// A total within a few ulps of a whole number of splits counts as that whole
/// number.
///
/// Returns `None` if any value is not positive, the split distance is not
/// strictly smaller than the total distance, or more than [`MAX_SPLIT_COUNT`]
/// entries would be produced.
#[must_use]
pub fn get_split_times(
    speed: f64,
    speed_unit: SpeedUnit,
    distance: f64,
    distance_unit: DistanceUnit,
    split_distance: f64,
    split_distance_unit: DistanceUnit,
) -> Option<Vec<Time>> {
    if distance <= 0.0 || speed <= 0.0 || split_distance <= 0.0 {
        return None;
    }

    let total_meters = distance_to_meters(distance, distance_unit);
    let split_meters = distance_to_meters(split_distance, split_distance_unit);
    if split_meters >= total_meters {
        debug!(
            split_meters,
            total_meters, "split distance must be smaller than the total distance"
        );
        return None;
    }

    let split_ratio = total_meters / split_meters;
    if split_ratio > MAX_SPLIT_COUNT as f64 {
        debug!(
            split_ratio,
            max_splits = MAX_SPLIT_COUNT,
            "split distance too small for the total distance"
        );
        return None;
    }

    let meters_per_second = speed_to_meters_per_second(speed, speed_unit);
    let split_count = (split_ratio * (1.0 - SPLIT_COUNT_TOLERANCE)).ceil().max(2.0) as usize;

    let splits = (1..split_count)
        .map(|index| index as f64 * split_meters)
        .chain(iter::once(total_meters))
        .map(|meters| Time::from_seconds_unchecked(meters / meters_per_second))
        .collect();

    Some(splits)
}
