// ABOUTME: Integration tests for distance conversions and unit-tagged dispatch
// ABOUTME: Covers fixed conversions, round trips through every unit, and distance from speed and time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{assert_approx, init_test_logging, to_fixed_4};
use endurance_metrics::constants::distance::{
    KILOMETERS_IN_MILE, METERS_IN_KILOMETER, METERS_IN_MILE,
};
use endurance_metrics::distance::{
    calculate_distance, convert_distance, distance_to_meters, kilometers_to_meters,
    kilometers_to_miles, meters_to_distance, meters_to_kilometers, meters_to_miles,
    miles_to_kilometers, miles_to_meters, try_convert_distance,
};
use endurance_metrics::{DistanceUnit, MetricsError, SpeedUnit, Time, UnitKind};

const SAMPLE_DISTANCES: [f64; 6] = [0.5, 1.0, 5.0, 21.097_5, 42.195, 1_609.344];

#[test]
fn test_fixed_conversions() {
    assert_eq!(meters_to_kilometers(METERS_IN_KILOMETER), 1.0);
    assert_eq!(meters_to_kilometers(1_000.0), 1.0);
    assert_eq!(meters_to_miles(METERS_IN_MILE), 1.0);
    assert_eq!(kilometers_to_miles(KILOMETERS_IN_MILE), 1.0);
    assert_eq!(kilometers_to_meters(1.0), METERS_IN_KILOMETER);
    assert_eq!(miles_to_kilometers(1.0), KILOMETERS_IN_MILE);
    assert_eq!(miles_to_meters(1.0), 1_609.344);
}

#[test]
fn test_fixed_conversions_accept_negative_values() {
    assert_eq!(meters_to_kilometers(-500.0), -0.5);
    assert_eq!(kilometers_to_meters(-2.0), -2_000.0);
}

#[test]
fn test_distance_to_meters_dispatch() {
    assert_eq!(distance_to_meters(42.0, DistanceUnit::Meters), 42.0);
    assert_eq!(distance_to_meters(5.0, DistanceUnit::Kilometers), 5_000.0);
    assert_eq!(distance_to_meters(1.0, DistanceUnit::Miles), METERS_IN_MILE);
}

#[test]
fn test_meters_to_distance_dispatch() {
    assert_eq!(meters_to_distance(42.0, DistanceUnit::Meters), 42.0);
    assert_eq!(meters_to_distance(5_000.0, DistanceUnit::Kilometers), 5.0);
    assert_eq!(meters_to_distance(METERS_IN_MILE, DistanceUnit::Miles), 1.0);
}

#[test]
fn test_convert_distance_meters_to_miles() {
    let miles = convert_distance(1_000.0, DistanceUnit::Meters, DistanceUnit::Miles);
    assert_eq!(to_fixed_4(miles), "0.6214");
}

#[test]
fn test_convert_distance_same_unit_is_identity() {
    for unit in DistanceUnit::ALL {
        assert_approx(convert_distance(12.5, unit, unit), 12.5);
    }
}

#[test]
fn test_convert_distance_round_trips() {
    for from in DistanceUnit::ALL {
        for to in DistanceUnit::ALL {
            for distance in SAMPLE_DISTANCES {
                let there = convert_distance(distance, from, to);
                let back = convert_distance(there, to, from);
                assert_approx(back, distance);
            }
        }
    }
}

#[test]
fn test_convert_distance_composes() {
    for a in DistanceUnit::ALL {
        for b in DistanceUnit::ALL {
            for c in DistanceUnit::ALL {
                for distance in SAMPLE_DISTANCES {
                    let via = convert_distance(convert_distance(distance, a, b), b, c);
                    let direct = convert_distance(distance, a, c);
                    assert_approx(via, direct);
                }
            }
        }
    }
}

#[test]
fn test_try_convert_distance_with_tags() {
    let km = try_convert_distance(1.0, "mi", "kilometers").unwrap();
    assert_approx(km, KILOMETERS_IN_MILE);
}

#[test]
fn test_try_convert_distance_rejects_unknown_unit() {
    let err = try_convert_distance(1.0, "furlong", "m").unwrap_err();
    match err {
        MetricsError::UnsupportedUnit { kind, value } => {
            assert_eq!(kind, UnitKind::Distance);
            assert_eq!(value, "furlong");
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(try_convert_distance(1.0, "m", "leagues").is_err());
}

#[test]
fn test_calculate_distance() {
    init_test_logging();

    let one_hour = Time::new(1, 0, 0);
    let meters = calculate_distance(10.0, SpeedUnit::KilometersPerHour, &one_hour, None).unwrap();
    assert_approx(meters, 10_000.0);

    let km = calculate_distance(
        10.0,
        SpeedUnit::KilometersPerHour,
        &one_hour,
        Some(DistanceUnit::Kilometers),
    )
    .unwrap();
    assert_approx(km, 10.0);

    let miles = calculate_distance(
        5.0,
        SpeedUnit::MetersPerSecond,
        &Time::new(0, 10, 0),
        Some(DistanceUnit::Miles),
    )
    .unwrap();
    assert_approx(miles, 3_000.0 / METERS_IN_MILE);
}

#[test]
fn test_calculate_distance_zero_speed() {
    let distance = calculate_distance(0.0, SpeedUnit::MilesPerHour, &Time::new(0, 30, 0), None);
    assert_eq!(distance, Some(0.0));
}

#[test]
fn test_calculate_distance_invalid_inputs() {
    init_test_logging();

    let one_hour = Time::new(1, 0, 0);
    assert_eq!(
        calculate_distance(-10.0, SpeedUnit::KilometersPerHour, &one_hour, None),
        None
    );
    assert_eq!(
        calculate_distance(10.0, SpeedUnit::KilometersPerHour, &Time::new(0, 0, 0), None),
        None
    );
    assert_eq!(
        calculate_distance(10.0, SpeedUnit::KilometersPerHour, &Time::new(-1, 0, 0), None),
        None
    );
}
