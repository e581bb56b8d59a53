// ABOUTME: Tunable metrics parameters loaded from environment variables with validation
// ABOUTME: Riegel exponent, pace to speed precision, max HR formula, and heart rate zone table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;
use crate::constants::heart_rate::ZONE_BOUNDARIES;
use crate::constants::pace::{DEFAULT_FRACTION_DIGITS, MAX_FRACTION_DIGITS};
use crate::constants::prediction::{MAX_RIEGEL_EXPONENT, MIN_RIEGEL_EXPONENT, RIEGEL_EXPONENT};
use crate::heart_rate::{
    zone_ranges_from_boundaries, HeartRateZone, HeartRateZoneMethod, HeartRateZoneRange,
    MaxHeartRateFormula,
};

/// Environment variable for the Riegel fatigue exponent
pub const RIEGEL_EXPONENT_VAR: &str = "METRICS_RIEGEL_EXPONENT";
/// Environment variable for the default pace to speed precision
pub const PACE_FRACTION_DIGITS_VAR: &str = "METRICS_PACE_FRACTION_DIGITS";
/// Environment variable for comma-separated heart rate zone boundaries
pub const ZONE_BOUNDARIES_VAR: &str = "METRICS_HEART_RATE_ZONE_BOUNDARIES";
/// Environment variable for the max heart rate formula name
pub const MAX_HEART_RATE_FORMULA_VAR: &str = "METRICS_MAX_HEART_RATE_FORMULA";
/// Environment variable for the zone calculation method name
pub const ZONE_METHOD_VAR: &str = "METRICS_HEART_RATE_ZONE_METHOD";

/// Most boundaries accepted in a zone table (ten zones)
const MAX_ZONE_BOUNDARIES: usize = 11;

/// Metrics configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsConfig {
    /// Riegel fatigue exponent, in `(1.0, 1.2]`
    pub riegel_exponent: f64,
    /// Decimal places for pace to speed conversion, in `0..=20`
    pub pace_fraction_digits: i32,
    /// Cumulative zone boundaries, strictly increasing fractions in `(0, 1]`
    pub heart_rate_zone_boundaries: Vec<f64>,
    /// Formula used to estimate max heart rate from age
    pub max_heart_rate_formula: MaxHeartRateFormula,
    /// Method used to turn a max heart rate into zones
    pub heart_rate_zone_method: HeartRateZoneMethod,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            riegel_exponent: RIEGEL_EXPONENT,
            pace_fraction_digits: DEFAULT_FRACTION_DIGITS,
            heart_rate_zone_boundaries: ZONE_BOUNDARIES.to_vec(),
            max_heart_rate_formula: MaxHeartRateFormula::default(),
            heart_rate_zone_method: HeartRateZoneMethod::default(),
        }
    }
}

impl MetricsConfig {
    /// Load configuration from environment, falling back to defaults
    ///
    /// Unset or unparsable variables keep their default. If the resulting
    /// configuration fails validation the whole default configuration is used.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let config = Self {
            riegel_exponent: env::var(RIEGEL_EXPONENT_VAR)
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.riegel_exponent),
            pace_fraction_digits: env::var(PACE_FRACTION_DIGITS_VAR)
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.pace_fraction_digits),
            heart_rate_zone_boundaries: env::var(ZONE_BOUNDARIES_VAR)
                .ok()
                .and_then(|s| parse_boundaries(&s))
                .unwrap_or_else(|| defaults.heart_rate_zone_boundaries.clone()),
            max_heart_rate_formula: env::var(MAX_HEART_RATE_FORMULA_VAR)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_heart_rate_formula),
            heart_rate_zone_method: env::var(ZONE_METHOD_VAR)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.heart_rate_zone_method),
        };

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!(error = %e, "invalid metrics configuration, using defaults");
                defaults
            }
        }
    }

    /// Load configuration from environment, rejecting malformed values
    ///
    /// Unset variables keep their default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a variable is set but cannot be parsed,
    /// or any validation error from [`Self::validate`]
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let heart_rate_zone_boundaries = match env::var(ZONE_BOUNDARIES_VAR) {
            Ok(raw) => parse_boundaries(&raw).ok_or(ConfigError::Parse {
                variable: ZONE_BOUNDARIES_VAR,
                value: raw,
            })?,
            Err(_) => defaults.heart_rate_zone_boundaries,
        };

        let config = Self {
            riegel_exponent: parse_env(RIEGEL_EXPONENT_VAR)?.unwrap_or(defaults.riegel_exponent),
            pace_fraction_digits: parse_env(PACE_FRACTION_DIGITS_VAR)?
                .unwrap_or(defaults.pace_fraction_digits),
            heart_rate_zone_boundaries,
            max_heart_rate_formula: parse_env(MAX_HEART_RATE_FORMULA_VAR)?
                .unwrap_or(defaults.max_heart_rate_formula),
            heart_rate_zone_method: parse_env(ZONE_METHOD_VAR)?
                .unwrap_or(defaults.heart_rate_zone_method),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check every field against its accepted range
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for an out-of-range exponent or
    /// precision, and `ConfigError::InvalidZoneTable` for unusable boundaries
    pub fn validate(&self) -> Result<(), ConfigError> {
        let exponent_in_range = self.riegel_exponent > MIN_RIEGEL_EXPONENT
            && self.riegel_exponent <= MAX_RIEGEL_EXPONENT;
        if !exponent_in_range {
            return Err(ConfigError::InvalidRange {
                field: "riegel_exponent",
                reason: format!(
                    "must be greater than {MIN_RIEGEL_EXPONENT} and at most {MAX_RIEGEL_EXPONENT}, got {}",
                    self.riegel_exponent
                ),
            });
        }

        if !(0..=MAX_FRACTION_DIGITS).contains(&self.pace_fraction_digits) {
            return Err(ConfigError::InvalidRange {
                field: "pace_fraction_digits",
                reason: format!(
                    "must be between 0 and {MAX_FRACTION_DIGITS}, got {}",
                    self.pace_fraction_digits
                ),
            });
        }

        validate_boundaries(&self.heart_rate_zone_boundaries)
    }

    /// Zone table described by the configured boundaries
    #[must_use]
    pub fn heart_rate_zone_ranges(&self) -> Vec<HeartRateZoneRange> {
        zone_ranges_from_boundaries(&self.heart_rate_zone_boundaries)
    }

    /// Estimate max heart rate from age with the configured formula
    #[must_use]
    pub fn estimate_max_heart_rate(&self, age: f64) -> Option<f64> {
        self.max_heart_rate_formula.estimate(age)
    }

    /// Heart rate zones with the configured method and zone table
    ///
    /// `resting_heart_rate` is required by the Karvonen method.
    #[must_use]
    pub fn heart_rate_zones(
        &self,
        max_heart_rate: f64,
        resting_heart_rate: Option<f64>,
    ) -> Option<Vec<HeartRateZone>> {
        self.heart_rate_zone_method.calculate(
            max_heart_rate,
            resting_heart_rate,
            &self.heart_rate_zone_ranges(),
        )
    }
}

/// Read and parse one environment variable; `Ok(None)` when unset
fn parse_env<T: FromStr>(variable: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(variable) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(ConfigError::Parse {
                variable,
                value: raw,
            }),
        },
        Err(_) => Ok(None),
    }
}

/// Parse `"0.5,0.6,..."` into boundaries; `None` if any entry is not a number
fn parse_boundaries(raw: &str) -> Option<Vec<f64>> {
    raw.split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect()
}

fn validate_boundaries(boundaries: &[f64]) -> Result<(), ConfigError> {
    if boundaries.len() < 2 {
        return Err(ConfigError::InvalidZoneTable(
            "at least two boundaries are needed for one zone",
        ));
    }
    if boundaries.len() > MAX_ZONE_BOUNDARIES {
        return Err(ConfigError::InvalidZoneTable(
            "at most eleven boundaries (ten zones) are supported",
        ));
    }
    let is_fraction = |boundary: f64| boundary > 0.0 && boundary <= 1.0;
    if !boundaries.iter().all(|&boundary| is_fraction(boundary)) {
        return Err(ConfigError::InvalidZoneTable(
            "boundaries must be fractions in (0, 1]",
        ));
    }
    if boundaries.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(ConfigError::InvalidZoneTable(
            "boundaries must be strictly increasing",
        ));
    }
    Ok(())
}
