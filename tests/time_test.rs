// ABOUTME: Integration tests for elapsed time, race time, Riegel prediction, and split times
// ABOUTME: Reference values use exact speeds so truncated seconds are deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use endurance_metrics::time::{
    calculate_race_time, get_split_times, seconds_to_time, time_prediction_riegel,
    time_prediction_riegel_with_exponent, time_to_seconds, MAX_SPLIT_COUNT,
};
use endurance_metrics::{DistanceUnit, SpeedUnit, Time};

#[test]
fn test_time_to_seconds() {
    assert_eq!(time_to_seconds(&Time::new(1, 1, 1)), Some(3_661));
    assert_eq!(time_to_seconds(&Time::new(0, 0, 1)), Some(1));
    assert_eq!(time_to_seconds(&Time::new(0, 90, 0)), Some(5_400));
}

#[test]
fn test_time_to_seconds_rejects_non_positive() {
    init_test_logging();

    assert_eq!(time_to_seconds(&Time::new(0, 0, 0)), None);
    assert_eq!(time_to_seconds(&Time::new(0, -5, 0)), None);
    assert_eq!(time_to_seconds(&Time::new(1, -60, 0)), None);
}

#[test]
fn test_time_to_seconds_accepts_mixed_signs_with_positive_total() {
    assert_eq!(time_to_seconds(&Time::new(1, -30, 0)), Some(1_800));
}

#[test]
fn test_seconds_to_time() {
    assert_eq!(seconds_to_time(3_661.5), Some(Time::new(1, 1, 1)));
    assert_eq!(seconds_to_time(59.0), Some(Time::new(0, 0, 59)));
    assert_eq!(seconds_to_time(90_000.0), Some(Time::new(25, 0, 0)));
    assert_eq!(seconds_to_time(0.0), Some(Time::default()));
    assert_eq!(seconds_to_time(-1.0), None);
    assert_eq!(seconds_to_time(f64::NAN), None);
}

#[test]
fn test_seconds_round_trip_for_normalised_times() {
    for time in [
        Time::new(0, 0, 1),
        Time::new(0, 59, 59),
        Time::new(2, 13, 26),
        Time::new(26, 5, 0),
    ] {
        let seconds = time_to_seconds(&time).unwrap();
        assert_eq!(seconds_to_time(seconds as f64), Some(time));
    }
}

#[test]
fn test_calculate_race_time() {
    assert_eq!(
        calculate_race_time(5.0, DistanceUnit::Miles, 10.0, SpeedUnit::MilesPerHour),
        Some(Time::new(0, 30, 0))
    );
    assert_eq!(
        calculate_race_time(
            42.195,
            DistanceUnit::Kilometers,
            12.0,
            SpeedUnit::KilometersPerHour
        ),
        Some(Time::new(3, 30, 58))
    );
    assert_eq!(
        calculate_race_time(10_000.0, DistanceUnit::Meters, 5.0, SpeedUnit::MetersPerSecond),
        Some(Time::new(0, 33, 20))
    );
}

#[test]
fn test_calculate_race_time_rejects_non_positive() {
    assert_eq!(
        calculate_race_time(0.0, DistanceUnit::Meters, 5.0, SpeedUnit::MetersPerSecond),
        None
    );
    assert_eq!(
        calculate_race_time(10.0, DistanceUnit::Meters, -5.0, SpeedUnit::MetersPerSecond),
        None
    );
}

#[test]
fn test_time_prediction_riegel_half_to_full_marathon() {
    let predicted = time_prediction_riegel(
        &Time::new(1, 4, 0),
        21.0975,
        DistanceUnit::Kilometers,
        42.195,
        None,
    );
    assert_eq!(predicted, Some(Time::new(2, 13, 26)));
}

#[test]
fn test_time_prediction_riegel_mixed_units() {
    let predicted = time_prediction_riegel(
        &Time::new(0, 40, 0),
        10.0,
        DistanceUnit::Kilometers,
        5_000.0,
        Some(DistanceUnit::Meters),
    );
    assert_eq!(predicted, Some(Time::new(0, 19, 11)));
}

#[test]
fn test_time_prediction_riegel_same_distance_is_identity() {
    let achieved = Time::new(0, 25, 30);
    let predicted =
        time_prediction_riegel(&achieved, 5.0, DistanceUnit::Kilometers, 5.0, None);
    assert_eq!(predicted, Some(achieved));
}

#[test]
fn test_time_prediction_riegel_with_exponent() {
    let predicted = time_prediction_riegel_with_exponent(
        &Time::new(0, 40, 0),
        10.0,
        DistanceUnit::Kilometers,
        5.0,
        None,
        1.1,
    );
    assert_eq!(predicted, Some(Time::new(0, 18, 39)));
}

#[test]
fn test_time_prediction_riegel_invalid_inputs() {
    let achieved = Time::new(0, 40, 0);
    assert_eq!(
        time_prediction_riegel(&achieved, 0.0, DistanceUnit::Kilometers, 5.0, None),
        None
    );
    assert_eq!(
        time_prediction_riegel(&achieved, 10.0, DistanceUnit::Kilometers, -5.0, None),
        None
    );
    assert_eq!(
        time_prediction_riegel(&Time::default(), 10.0, DistanceUnit::Kilometers, 5.0, None),
        None
    );
}

#[test]
fn test_get_split_times_with_partial_last_split() {
    let splits = get_split_times(
        5.0,
        SpeedUnit::MetersPerSecond,
        10_000.0,
        DistanceUnit::Meters,
        3_000.0,
        DistanceUnit::Meters,
    )
    .unwrap();

    assert_eq!(
        splits,
        vec![
            Time::new(0, 10, 0),
            Time::new(0, 20, 0),
            Time::new(0, 30, 0),
            Time::new(0, 33, 20),
        ]
    );
}

#[test]
fn test_get_split_times_exact_multiple_has_no_empty_split() {
    let splits = get_split_times(
        5.0,
        SpeedUnit::MetersPerSecond,
        10_000.0,
        DistanceUnit::Meters,
        2_000.0,
        DistanceUnit::Meters,
    )
    .unwrap();

    assert_eq!(splits.len(), 5);
    assert_eq!(splits.last(), Some(&Time::new(0, 33, 20)));
}

#[test]
fn test_get_split_times_kilometer_splits() {
    let splits = get_split_times(
        18.0,
        SpeedUnit::KilometersPerHour,
        5.0,
        DistanceUnit::Kilometers,
        1.0,
        DistanceUnit::Kilometers,
    )
    .unwrap();

    assert_eq!(
        splits,
        vec![
            Time::new(0, 3, 20),
            Time::new(0, 6, 40),
            Time::new(0, 10, 0),
            Time::new(0, 13, 20),
            Time::new(0, 16, 40),
        ]
    );
}

#[test]
fn test_get_split_times_mile_splits_over_kilometers() {
    let splits = get_split_times(
        18.0,
        SpeedUnit::KilometersPerHour,
        5.0,
        DistanceUnit::Kilometers,
        1.0,
        DistanceUnit::Miles,
    )
    .unwrap();

    assert_eq!(splits.len(), 4);
    assert_eq!(splits[3], Time::new(0, 16, 40));
    let seconds: Vec<i64> = splits
        .iter()
        .map(|split| time_to_seconds(split).unwrap())
        .collect();
    assert!(seconds.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_get_split_times_total_just_past_one_split() {
    let splits = get_split_times(
        5.0,
        SpeedUnit::MetersPerSecond,
        10_000.000_01,
        DistanceUnit::Meters,
        10_000.0,
        DistanceUnit::Meters,
    )
    .unwrap();

    assert_eq!(splits.len(), 2);
    assert_eq!(splits[0], Time::new(0, 33, 20));
    assert_eq!(splits[1], Time::new(0, 33, 20));
}

#[test]
fn test_get_split_times_whole_miles_have_no_empty_split() {
    for miles in [2.0, 3.0, 13.0, 26.0] {
        let splits = get_split_times(
            10.0,
            SpeedUnit::MilesPerHour,
            miles,
            DistanceUnit::Miles,
            1.0,
            DistanceUnit::Miles,
        )
        .unwrap();
        assert_eq!(splits.len() as f64, miles);
    }
}

#[test]
fn test_get_split_times_rejects_too_many_splits() {
    init_test_logging();

    let splits = get_split_times(
        5.0,
        SpeedUnit::MetersPerSecond,
        1_000_000.0,
        DistanceUnit::Kilometers,
        1e-12,
        DistanceUnit::Meters,
    );
    assert_eq!(splits, None);

    let at_limit = get_split_times(
        5.0,
        SpeedUnit::MetersPerSecond,
        MAX_SPLIT_COUNT as f64,
        DistanceUnit::Meters,
        1.0,
        DistanceUnit::Meters,
    )
    .unwrap();
    assert_eq!(at_limit.len(), MAX_SPLIT_COUNT);
}

#[test]
fn test_get_split_times_invalid_inputs() {
    init_test_logging();

    let invalid = [
        (0.0, 10_000.0, 1_000.0),
        (5.0, 0.0, 1_000.0),
        (5.0, 10_000.0, 0.0),
        (5.0, 10_000.0, 10_000.0),
        (5.0, 10_000.0, 20_000.0),
    ];
    for (speed, distance, split) in invalid {
        assert_eq!(
            get_split_times(
                speed,
                SpeedUnit::MetersPerSecond,
                distance,
                DistanceUnit::Meters,
                split,
                DistanceUnit::Meters,
            ),
            None,
            "speed {speed}, distance {distance}, split {split}"
        );
    }
}
