//! Common test utilities for rust-dsp.
//!
//! This module provides float comparison helpers and deterministic synthetic
//! signals shared by the end-to-end tests.

#![allow(dead_code)]

/// Tiered float comparison with tolerance levels.
///
/// - NaN only matches NaN, and infinities only match the same infinity
/// - For values near zero (|expected| < 1e-10): use absolute tolerance
/// - For other values: use relative tolerance
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(
            actual.is_nan(),
            "{}: Expected NaN but got {}",
            context,
            actual
        );
        return;
    }

    if actual.is_nan() {
        panic!("{}: Got NaN but expected {}", context, expected);
    }

    if expected.is_infinite() {
        assert!(
            actual == expected,
            "{}: Expected {} but got {}",
            context,
            expected,
            actual
        );
        return;
    }

    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{}: Expected {} but got {} (diff: {})",
            context,
            expected,
            actual,
            diff
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{}: Expected {} but got {} (rel diff: {:.2e})",
        context,
        expected,
        actual,
        rel_diff
    );
}

/// Assert two sequences are equal with tolerance.
pub fn assert_series_eq(actual: &[f64], expected: &[f64], epsilon: f64, name: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: Length mismatch: {} vs {}",
        name,
        actual.len(),
        expected.len()
    );

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let context = format!("{}[{}]", name, i);
        assert_float_eq(a, e, epsilon, &context);
    }
}

// ============================================================================
// Synthetic Signal Generators
// ============================================================================

/// Generate a linear ramp.
pub fn generate_linear(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// Generate a sine wave around `center`.
pub fn generate_sine(center: f64, amplitude: f64, period: usize, len: usize) -> Vec<f64> {
    use std::f64::consts::PI;
    (0..len)
        .map(|i| center + amplitude * (2.0 * PI * i as f64 / period as f64).sin())
        .collect()
}

/// Generate a random walk with a deterministic seed.
pub fn generate_random_walk(start: f64, volatility: f64, len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut next = || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
    };

    let mut value = start;
    (0..len)
        .map(|i| {
            if i > 0 {
                value += next() * volatility;
            }
            value
        })
        .collect()
}

/// Overlay isolated spikes of height `spike` every `every` samples.
pub fn with_spikes(signal: &[f64], every: usize, spike: f64) -> Vec<f64> {
    signal
        .iter()
        .enumerate()
        .map(|(i, &x)| if i % every == every / 2 { x + spike } else { x })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_float_eq_normal() {
        assert_float_eq(1.0, 1.0, 1e-10, "test");
        assert_float_eq(100.0, 100.0000001, 1e-6, "test");
    }

    #[test]
    fn test_assert_float_eq_special() {
        assert_float_eq(f64::NAN, f64::NAN, 1e-10, "test");
        assert_float_eq(f64::INFINITY, f64::INFINITY, 1e-10, "test");
    }

    #[test]
    #[should_panic(expected = "Expected -inf")]
    fn test_assert_float_eq_infinity_sign() {
        assert_float_eq(f64::INFINITY, f64::NEG_INFINITY, 1e-10, "test");
    }

    #[test]
    fn test_random_walk_deterministic() {
        let a = generate_random_walk(100.0, 1.0, 50, 42);
        let b = generate_random_walk(100.0, 1.0, 50, 42);
        assert_eq!(a, b);
        assert_eq!(a[0], 100.0);
    }
}
