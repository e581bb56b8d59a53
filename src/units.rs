// ABOUTME: Distance and speed unit tags plus unit-tagged distance and speed values
// ABOUTME: Parses unit names and symbols, reporting unrecognised tags as MetricsError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distance::convert_distance;
use crate::errors::MetricsError;
use crate::speed::convert_speed;

/// Unit of a distance value
///
/// Conversions between variants go through meters; see [`crate::distance`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    /// Meters (base unit)
    #[default]
    Meters,
    /// Kilometers
    Kilometers,
    /// International statute miles
    Miles,
}

impl DistanceUnit {
    /// Every recognised distance unit
    pub const ALL: [Self; 3] = [Self::Meters, Self::Kilometers, Self::Miles];

    /// Unit name as used in serialised form
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Meters => "meters",
            Self::Kilometers => "kilometers",
            Self::Miles => "miles",
        }
    }

    /// Short unit symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Miles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DistanceUnit {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Self::Meters),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Ok(Self::Kilometers),
            "mi" | "mile" | "miles" => Ok(Self::Miles),
            _ => Err(MetricsError::unsupported_distance_unit(s)),
        }
    }
}

/// Unit of a speed value
///
/// Conversions between variants go through meters per second; see [`crate::speed`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    /// Meters per second (base unit)
    #[default]
    MetersPerSecond,
    /// Kilometers per hour
    KilometersPerHour,
    /// Miles per hour
    MilesPerHour,
}

impl SpeedUnit {
    /// Every recognised speed unit
    pub const ALL: [Self; 3] = [
        Self::MetersPerSecond,
        Self::KilometersPerHour,
        Self::MilesPerHour,
    ];

    /// Unit name as used in serialised form
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MetersPerSecond => "meters_per_second",
            Self::KilometersPerHour => "kilometers_per_hour",
            Self::MilesPerHour => "miles_per_hour",
        }
    }

    /// Short unit symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::MetersPerSecond => "m/s",
            Self::KilometersPerHour => "km/h",
            Self::MilesPerHour => "mph",
        }
    }

    /// Distance unit covered per hour by this speed unit, if any
    ///
    /// A pace derived from a km/h speed is per kilometer, from mph per mile.
    #[must_use]
    pub const fn hourly_distance_unit(&self) -> Option<DistanceUnit> {
        match self {
            Self::MetersPerSecond => None,
            Self::KilometersPerHour => Some(DistanceUnit::Kilometers),
            Self::MilesPerHour => Some(DistanceUnit::Miles),
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for SpeedUnit {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m/s" | "mps" | "meters_per_second" => Ok(Self::MetersPerSecond),
            "km/h" | "kph" | "kmh" | "kilometers_per_hour" => Ok(Self::KilometersPerHour),
            "mph" | "mi/h" | "miles_per_hour" => Ok(Self::MilesPerHour),
            _ => Err(MetricsError::unsupported_speed_unit(s)),
        }
    }
}

/// A distance tagged with its unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Distance {
    /// Magnitude in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: DistanceUnit,
}

impl Distance {
    /// Create a distance in the given unit
    #[must_use]
    pub const fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    /// Create a distance in meters
    #[must_use]
    pub const fn meters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Meters)
    }

    /// Create a distance in kilometers
    #[must_use]
    pub const fn kilometers(value: f64) -> Self {
        Self::new(value, DistanceUnit::Kilometers)
    }

    /// Create a distance in miles
    #[must_use]
    pub const fn miles(value: f64) -> Self {
        Self::new(value, DistanceUnit::Miles)
    }

    /// Same distance expressed in `unit`
    #[must_use]
    pub fn to(&self, unit: DistanceUnit) -> Self {
        Self::new(convert_distance(self.value, self.unit, unit), unit)
    }

    /// Magnitude in meters
    #[must_use]
    pub fn in_meters(&self) -> f64 {
        self.to(DistanceUnit::Meters).value
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A speed tagged with its unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Speed {
    /// Magnitude in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: SpeedUnit,
}

impl Speed {
    /// Create a speed in the given unit
    #[must_use]
    pub const fn new(value: f64, unit: SpeedUnit) -> Self {
        Self { value, unit }
    }

    /// Create a speed in meters per second
    #[must_use]
    pub const fn meters_per_second(value: f64) -> Self {
        Self::new(value, SpeedUnit::MetersPerSecond)
    }

    /// Create a speed in kilometers per hour
    #[must_use]
    pub const fn kilometers_per_hour(value: f64) -> Self {
        Self::new(value, SpeedUnit::KilometersPerHour)
    }

    /// Create a speed in miles per hour
    #[must_use]
    pub const fn miles_per_hour(value: f64) -> Self {
        Self::new(value, SpeedUnit::MilesPerHour)
    }

    /// Same speed expressed in `unit`
    #[must_use]
    pub fn to(&self, unit: SpeedUnit) -> Self {
        Self::new(convert_speed(self.value, self.unit, unit), unit)
    }

    /// Magnitude in meters per second
    #[must_use]
    pub fn in_meters_per_second(&self) -> f64 {
        self.to(SpeedUnit::MetersPerSecond).value
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
