// ABOUTME: Fixed conversion factors and formula coefficients used across the metrics engine
// ABOUTME: Groups distance, time, pace, prediction, and heart-rate constants by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Conversion factors and formula coefficients
//!
//! Every conversion in this crate is expressed in terms of the values below so
//! that the distance, speed, and pace families stay mutually consistent.

/// Length conversion factors
pub mod distance {
    /// Meters in one kilometer
    pub const METERS_IN_KILOMETER: f64 = 1_000.0;

    /// Meters in one international statute mile
    pub const METERS_IN_MILE: f64 = 1_609.344;

    /// Kilometers in one international statute mile
    pub const KILOMETERS_IN_MILE: f64 = 1.609_344;
}

/// Duration conversion factors
pub mod time {
    /// Seconds in one minute
    pub const SECONDS_IN_MINUTE: f64 = 60.0;

    /// Seconds in one hour
    pub const SECONDS_IN_HOUR: f64 = 3_600.0;

    /// Minutes in one hour
    pub const MINUTES_IN_HOUR: f64 = 60.0;
}

/// Pace field bounds and speed rounding
pub mod pace {
    /// Upper bound (inclusive) for the minutes and seconds fields of a pace
    pub const MAX_FIELD_VALUE: i32 = 60;

    /// Decimal places used when converting a pace to speed
    pub const DEFAULT_FRACTION_DIGITS: i32 = 2;

    /// Largest precision accepted for pace to speed rounding
    pub const MAX_FRACTION_DIGITS: i32 = 20;
}

/// Race time prediction
///
/// Reference: Riegel, P.S. (1981). "Athletic records and human endurance."
/// *American Scientist*, 69(3), 285-290.
pub mod prediction {
    /// Riegel fatigue exponent (typical value for running)
    pub const RIEGEL_EXPONENT: f64 = 1.06;

    /// Smallest configurable Riegel exponent (exclusive)
    pub const MIN_RIEGEL_EXPONENT: f64 = 1.0;

    /// Largest configurable Riegel exponent (inclusive)
    pub const MAX_RIEGEL_EXPONENT: f64 = 1.2;
}

/// Maximum heart rate regressions and zone boundaries
pub mod heart_rate {
    /// Gellish et al. (2007) intercept: `207 - 0.7 x age`
    pub const GELLISH_AL_INTERCEPT: f64 = 207.0;
    /// Gellish et al. (2007) age slope
    pub const GELLISH_AL_SLOPE: f64 = 0.7;

    /// Haskell & Fox (1971) intercept: `220 - age`
    pub const HASKELL_FOX_INTERCEPT: f64 = 220.0;

    /// Gellish et al. (2007) non-linear intercept: `192 - 0.007 x age²`
    pub const GELLISH_COLL_INTERCEPT: f64 = 192.0;
    /// Gellish et al. (2007) non-linear age coefficient
    pub const GELLISH_COLL_COEFFICIENT: f64 = 0.007;

    /// Cumulative zone boundaries as fractions of heart-rate reserve or max heart rate.
    /// Zone `n` spans `ZONE_BOUNDARIES[n - 1]..ZONE_BOUNDARIES[n]`.
    pub const ZONE_BOUNDARIES: [f64; 6] = [0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

    /// Number of heart rate zones
    pub const ZONE_COUNT: usize = ZONE_BOUNDARIES.len() - 1;
}
