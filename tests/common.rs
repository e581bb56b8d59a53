// ABOUTME: Shared test utilities for endurance metrics integration tests
// ABOUTME: Provides quiet test logging and floating-point comparison helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]
//! Shared test utilities for `endurance_metrics`

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Default tolerance for floating-point comparisons
pub const EPSILON: f64 = 1e-9;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Assert two floats are equal within a relative tolerance of `EPSILON`
pub fn assert_approx(actual: f64, expected: f64) {
    let tolerance = EPSILON * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

/// Round to four decimal places the way the reference values are written
pub fn to_fixed_4(value: f64) -> String {
    format!("{value:.4}")
}
