// ABOUTME: Pace value type (minutes and seconds per unit distance) and its conversions
// ABOUTME: Pace to speed with configurable precision, and per-kilometer to per-mile conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::distance::KILOMETERS_IN_MILE;
use crate::constants::pace::{DEFAULT_FRACTION_DIGITS, MAX_FIELD_VALUE, MAX_FRACTION_DIGITS};
use crate::constants::time::{SECONDS_IN_HOUR, SECONDS_IN_MINUTE};

/// Time needed to cover one unit of distance
///
/// The distance unit is implied by context: a pace obtained from a km/h speed
/// is per kilometer, one obtained from a mph speed is per mile.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Pace {
    /// Whole minutes per unit distance
    pub minutes: i32,
    /// Remaining seconds per unit distance
    pub seconds: i32,
}

impl Pace {
    /// Create a pace from minutes and seconds
    #[must_use]
    pub const fn new(minutes: i32, seconds: i32) -> Self {
        Self { minutes, seconds }
    }

    /// Whether both fields are within `0..=60` and the pace is not zero
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        let minutes_valid = self.minutes >= 0 && self.minutes <= MAX_FIELD_VALUE;
        let seconds_valid = self.seconds >= 0 && self.seconds <= MAX_FIELD_VALUE;
        let non_zero = self.minutes != 0 || self.seconds != 0;
        minutes_valid && seconds_valid && non_zero
    }

    /// Total seconds per unit distance
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        f64::from(self.minutes) * SECONDS_IN_MINUTE + f64::from(self.seconds)
    }

    /// Decompose seconds per unit distance into whole minutes and whole seconds
    ///
    /// Sub-second precision is discarded. Returns `None` for non-positive or
    /// non-finite input.
    #[must_use]
    pub fn from_seconds(seconds_per_unit: f64) -> Option<Self> {
        if !seconds_per_unit.is_finite() || seconds_per_unit <= 0.0 {
            return None;
        }

        let minutes_per_unit = seconds_per_unit / SECONDS_IN_MINUTE;
        let minutes = minutes_per_unit.floor();
        let seconds = ((minutes_per_unit - minutes) * SECONDS_IN_MINUTE).floor();

        Some(Self::new(minutes as i32, seconds as i32))
    }

    fn validated(self) -> Option<Self> {
        if self.is_valid() {
            Some(self)
        } else {
            debug!(
                minutes = self.minutes,
                seconds = self.seconds,
                "pace fields must be within 0..=60 and not both zero"
            );
            None
        }
    }
}

/// Round `value` to `fraction_digits` decimal places
///
/// Rounds the exact stored value, with exact midpoints going away from zero:
/// `3.125` becomes `3.13`, while `1.005` (stored slightly below) becomes `1.0`.
fn round_to_fraction_digits(value: f64, fraction_digits: i32) -> Option<f64> {
    let scale = u32::try_from(fraction_digits).ok()?;
    let exact = Decimal::from_f64_retain(value)?;
    exact
        .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
        .parse()
        .ok()
}

/// Convert a pace to speed
///
/// A pace per kilometer gives km/h, a pace per mile gives mph. The result is
/// rounded to `fraction_digits` decimal places (default 2), with exact halves
/// rounded up. A precision outside `0..=20` silently falls back to the default.
///
/// Returns `None` if the pace is invalid.
///
/// # Example
///
/// ```rust
/// use endurance_metrics::pace::{pace_to_speed, Pace};
///
/// assert_eq!(pace_to_speed(Pace::new(4, 25), None), Some(13.58));
/// assert_eq!(pace_to_speed(Pace::new(4, 25), Some(1)), Some(13.6));
/// ```
#[must_use]
pub fn pace_to_speed(pace: Pace, fraction_digits: Option<i32>) -> Option<f64> {
    let pace = pace.validated()?;

    let fraction_digits = fraction_digits
        .filter(|digits| (0..=MAX_FRACTION_DIGITS).contains(digits))
        .unwrap_or(DEFAULT_FRACTION_DIGITS);

    let speed = SECONDS_IN_HOUR / pace.total_seconds();
    round_to_fraction_digits(speed, fraction_digits)
}

/// Convert a pace per kilometer to a pace per mile
///
/// Returns `None` if the pace is invalid.
#[must_use]
pub fn minutes_per_kilometer_to_minutes_per_mile(pace: Pace) -> Option<Pace> {
    let pace = pace.validated()?;
    Pace::from_seconds(pace.total_seconds() * KILOMETERS_IN_MILE)
}

/// Convert a pace per mile to a pace per kilometer
///
/// Returns `None` if the pace is invalid.
#[must_use]
pub fn minutes_per_mile_to_minutes_per_kilometer(pace: Pace) -> Option<Pace> {
    let pace = pace.validated()?;
    Pace::from_seconds(pace.total_seconds() / KILOMETERS_IN_MILE)
}
