// ABOUTME: Age-predicted maximum heart rate formulas and heart rate training zones
// ABOUTME: Implements Gellish, Haskell & Fox regressions plus Karvonen and percent-of-max zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Heart rate utilities
//!
//! # Maximum heart rate
//!
//! Three age-based regressions are provided, both as free functions and via
//! [`MaxHeartRateFormula`] for callers that pick the formula at runtime:
//!
//! - `GellishAl`: 207 - 0.7 x age
//! - `HaskellFox`: 220 - age
//! - `GellishColl`: 192 - 0.007 x age²
//!
//! # Scientific References
//!
//! - Fox, S.M., Naughton, J.P. & Haskell, W.L. (1971). "Physical activity and the prevention
//!   of coronary heart disease." *Ann Clin Res*, 3(6), 404-432.
//! - Gellish, R.L. et al. (2007). "Longitudinal modeling of the relationship between age and
//!   maximal heart rate." *Med Sci Sports Exerc*, 39(5), 822-829.
//! - Karvonen, M.J., Kentala, E. & Mustala, O. (1957). "The effects of training on heart
//!   rate; a longitudinal study." *Ann Med Exp Biol Fenn*, 35(3), 307-315.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::heart_rate::{
    GELLISH_AL_INTERCEPT, GELLISH_AL_SLOPE, GELLISH_COLL_COEFFICIENT, GELLISH_COLL_INTERCEPT,
    HASKELL_FOX_INTERCEPT, ZONE_BOUNDARIES, ZONE_COUNT,
};
use crate::errors::MetricsError;

/// Maximum heart rate using the Gellish et al. linear formula (`207 - 0.7 x age`)
///
/// Returns `None` if the age is not positive.
#[must_use]
pub fn max_heart_rate_gellish_al(age: f64) -> Option<f64> {
    MaxHeartRateFormula::GellishAl.estimate(age)
}

/// Maximum heart rate using the Haskell & Fox formula (`220 - age`)
///
/// Returns `None` if the age is not positive.
#[must_use]
pub fn max_heart_rate_haskell_fox(age: f64) -> Option<f64> {
    MaxHeartRateFormula::HaskellFox.estimate(age)
}

/// Maximum heart rate using the Gellish et al. non-linear formula (`192 - 0.007 x age²`)
///
/// Returns `None` if the age is not positive.
#[must_use]
pub fn max_heart_rate_gellish_coll(age: f64) -> Option<f64> {
    MaxHeartRateFormula::GellishColl.estimate(age)
}

/// Age-predicted maximum heart rate formula
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaxHeartRateFormula {
    /// Gellish et al. linear formula: 207 - 0.7 x age
    ///
    /// Longitudinal study, close to Tanaka's meta-analysis result
    #[default]
    GellishAl,

    /// Haskell & Fox formula: 220 - age
    ///
    /// Classic formula, widely known, tends to overestimate for older adults
    HaskellFox,

    /// Gellish et al. non-linear formula: 192 - 0.007 x age²
    GellishColl,
}

impl MaxHeartRateFormula {
    /// Estimate maximum heart rate in beats per minute from age in years
    ///
    /// Returns `None` if the age is not positive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use endurance_metrics::heart_rate::MaxHeartRateFormula;
    ///
    /// assert_eq!(MaxHeartRateFormula::HaskellFox.estimate(20.0), Some(200.0));
    /// assert_eq!(MaxHeartRateFormula::HaskellFox.estimate(0.0), None);
    /// ```
    #[must_use]
    #[allow(clippy::suboptimal_flops)] // product is rounded before the subtraction
    pub fn estimate(&self, age: f64) -> Option<f64> {
        if age <= 0.0 {
            return None;
        }

        let max_hr = match self {
            Self::GellishAl => GELLISH_AL_INTERCEPT - GELLISH_AL_SLOPE * age,
            Self::HaskellFox => HASKELL_FOX_INTERCEPT - age,
            Self::GellishColl => GELLISH_COLL_INTERCEPT - GELLISH_COLL_COEFFICIENT * age.powi(2),
        };

        Some(max_hr)
    }

    /// Formula name for logging and configuration
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GellishAl => "gellish_al",
            Self::HaskellFox => "haskell_fox",
            Self::GellishColl => "gellish_coll",
        }
    }

    /// The formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::GellishAl => "207 - 0.7 x age",
            Self::HaskellFox => "220 - age",
            Self::GellishColl => "192 - 0.007 x age²",
        }
    }
}

impl FromStr for MaxHeartRateFormula {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gellish_al" | "gellish" => Ok(Self::GellishAl),
            "haskell_fox" | "fox" => Ok(Self::HaskellFox),
            "gellish_coll" => Ok(Self::GellishColl),
            _ => Err(MetricsError::UnknownFormula(s.to_owned())),
        }
    }
}

/// Bounds of one heart rate zone
///
/// Percentages are fractions of heart rate reserve (Karvonen) or of maximum
/// heart rate (percent-of-max), covering `min_percentage..max_percentage`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HeartRateZoneRange {
    /// Zone number, starting at 1
    pub index: u8,
    /// Lower bound as a fraction
    pub min_percentage: f64,
    /// Upper bound as a fraction
    pub max_percentage: f64,
}

/// A heart rate zone with its bounds resolved to beats per minute
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HeartRateZone {
    /// Zone number, starting at 1
    pub index: u8,
    /// Lower bound as a fraction
    pub min_percentage: f64,
    /// Upper bound as a fraction
    pub max_percentage: f64,
    /// Lower bound in bpm, rounded
    pub min_heart_rate: u32,
    /// Upper bound in bpm, rounded
    pub max_heart_rate: u32,
}

impl HeartRateZone {
    fn from_range(range: &HeartRateZoneRange, limit: impl Fn(f64) -> u32) -> Self {
        Self {
            index: range.index,
            min_percentage: range.min_percentage,
            max_percentage: range.max_percentage,
            min_heart_rate: limit(range.min_percentage),
            max_heart_rate: limit(range.max_percentage),
        }
    }
}

/// Build contiguous zone ranges from cumulative boundaries
///
/// `n + 1` boundaries produce `n` zones numbered from 1. Boundaries are not
/// validated here; see [`crate::config::MetricsConfig::validate`].
#[must_use]
pub fn zone_ranges_from_boundaries(boundaries: &[f64]) -> Vec<HeartRateZoneRange> {
    boundaries
        .windows(2)
        .zip(1_u8..)
        .map(|(bounds, index)| HeartRateZoneRange {
            index,
            min_percentage: bounds[0],
            max_percentage: bounds[1],
        })
        .collect()
}

/// The standard five-zone table (50-60-70-80-90-100 %)
#[must_use]
pub fn default_zone_ranges() -> [HeartRateZoneRange; ZONE_COUNT] {
    std::array::from_fn(|zone| HeartRateZoneRange {
        index: (zone + 1) as u8,
        min_percentage: ZONE_BOUNDARIES[zone],
        max_percentage: ZONE_BOUNDARIES[zone + 1],
    })
}

/// Heart rate zones using the Karvonen (heart rate reserve) method
///
/// Each bound is `round(resting + (max - resting) x percentage)`.
///
/// Returns `None` if either heart rate is not positive or the maximum is not
/// above the resting heart rate.
#[must_use]
pub fn calculate_heart_rate_zones_using_karvonen(
    max_heart_rate: f64,
    resting_heart_rate: f64,
) -> Option<Vec<HeartRateZone>> {
    calculate_heart_rate_zones_using_karvonen_with_ranges(
        max_heart_rate,
        resting_heart_rate,
        &default_zone_ranges(),
    )
}

/// Karvonen zones over a custom zone table
#[must_use]
pub fn calculate_heart_rate_zones_using_karvonen_with_ranges(
    max_heart_rate: f64,
    resting_heart_rate: f64,
    ranges: &[HeartRateZoneRange],
) -> Option<Vec<HeartRateZone>> {
    if max_heart_rate <= 0.0 || resting_heart_rate <= 0.0 || max_heart_rate <= resting_heart_rate {
        debug!(
            max_heart_rate,
            resting_heart_rate, "Karvonen zones need 0 < resting heart rate < max heart rate"
        );
        return None;
    }

    let reserve = max_heart_rate - resting_heart_rate;
    #[allow(clippy::suboptimal_flops)]
    let limit = |percentage: f64| (resting_heart_rate + reserve * percentage).round() as u32;

    Some(
        ranges
            .iter()
            .map(|range| HeartRateZone::from_range(range, &limit))
            .collect(),
    )
}

/// Heart rate zones as percentages of maximum heart rate
///
/// Each bound is `round(max x percentage)`.
///
/// Returns `None` if the maximum heart rate is not positive.
#[must_use]
pub fn calculate_heart_rate_zones_using_max(max_heart_rate: f64) -> Option<Vec<HeartRateZone>> {
    calculate_heart_rate_zones_using_max_with_ranges(max_heart_rate, &default_zone_ranges())
}

/// Percent-of-max zones over a custom zone table
#[must_use]
pub fn calculate_heart_rate_zones_using_max_with_ranges(
    max_heart_rate: f64,
    ranges: &[HeartRateZoneRange],
) -> Option<Vec<HeartRateZone>> {
    if max_heart_rate <= 0.0 {
        return None;
    }

    let limit = |percentage: f64| (max_heart_rate * percentage).round() as u32;

    Some(
        ranges
            .iter()
            .map(|range| HeartRateZone::from_range(range, &limit))
            .collect(),
    )
}

/// Zone calculation method
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HeartRateZoneMethod {
    /// Percentages of heart rate reserve offset by resting heart rate
    #[default]
    Karvonen,
    /// Percentages of maximum heart rate
    PercentOfMax,
}

impl HeartRateZoneMethod {
    /// Calculate zones over `ranges` with this method
    ///
    /// Karvonen requires a resting heart rate and returns `None` without one.
    #[must_use]
    pub fn calculate(
        &self,
        max_heart_rate: f64,
        resting_heart_rate: Option<f64>,
        ranges: &[HeartRateZoneRange],
    ) -> Option<Vec<HeartRateZone>> {
        match self {
            Self::Karvonen => calculate_heart_rate_zones_using_karvonen_with_ranges(
                max_heart_rate,
                resting_heart_rate?,
                ranges,
            ),
            Self::PercentOfMax => {
                calculate_heart_rate_zones_using_max_with_ranges(max_heart_rate, ranges)
            }
        }
    }
}

impl FromStr for HeartRateZoneMethod {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "karvonen" | "hrr" => Ok(Self::Karvonen),
            "percent_of_max" | "max" => Ok(Self::PercentOfMax),
            _ => Err(MetricsError::UnknownZoneMethod(s.to_owned())),
        }
    }
}
