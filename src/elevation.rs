// ABOUTME: Slope and elevation change derived from horizontal distance
// ABOUTME: Slope is a signed percentage, elevation change shares the distance unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Slope as a signed percentage
///
/// `distance` and `elevation` must be in the same unit. A negative elevation
/// (descent) gives a negative slope.
///
/// Returns `None` if the distance is not positive.
#[must_use]
pub fn calculate_slope(distance: f64, elevation: f64) -> Option<f64> {
    if distance <= 0.0 {
        return None;
    }
    Some((elevation / distance) * 100.0)
}

/// Elevation change over `distance` at a slope given as a percentage
///
/// The result is in the unit of `distance`. Inverse of [`calculate_slope`].
///
/// Returns `None` if the distance is not positive.
#[must_use]
pub fn calculate_elevation(distance: f64, slope: f64) -> Option<f64> {
    if distance <= 0.0 {
        return None;
    }
    Some((slope * distance) / 100.0)
}
