//! Numeric type abstraction for sequence operations.
//!
//! This module defines the [`Real`] trait which abstracts over `f32` and `f64`
//! so that every operation in the crate is written once and instantiated for
//! both precisions.

use core::cmp::Ordering;
use core::fmt::Debug;
use num_traits::Float;

/// Trait for the floating-point element type of a sequence.
///
/// Implemented for `f32` and `f64`. All IEEE 754 values, including `±∞` and
/// NaN, are legal elements and flow through operations unchanged by any
/// validation step.
///
/// # Example
///
/// ```rust
/// use dsp_core::Real;
///
/// fn midpoint<T: Real>(a: T, b: T) -> T {
///     (a + b) / T::from_count(2)
/// }
///
/// assert_eq!(midpoint(1.0f32, 2.0), 1.5);
/// assert_eq!(midpoint(1.0f64, 2.0), 1.5);
/// ```
pub trait Real: Float + Copy + Send + Sync + Default + Debug + 'static {
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Not-a-number value.
    const NAN: Self;

    /// Convert an element count, rounding to the nearest representable value.
    #[must_use]
    fn from_count(value: usize) -> Self;

    /// Convert a signed integer, rounding to the nearest representable value.
    #[must_use]
    fn from_int(value: i64) -> Self;

    /// Total comparison that handles NaN consistently.
    ///
    /// Positive NaN orders after `+∞`, negative NaN before `-∞`, and `-0`
    /// before `+0`. On every other pair it agrees with `<`.
    #[must_use]
    fn total_cmp_fn(&self, other: &Self) -> Ordering;
}

impl Real for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const NAN: Self = f32::NAN;

    #[inline]
    fn from_count(value: usize) -> Self {
        value as f32
    }

    #[inline]
    fn from_int(value: i64) -> Self {
        value as f32
    }

    #[inline]
    fn total_cmp_fn(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Real for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const NAN: Self = f64::NAN;

    #[inline]
    fn from_count(value: usize) -> Self {
        value as f64
    }

    #[inline]
    fn from_int(value: i64) -> Self {
        value as f64
    }

    #[inline]
    fn total_cmp_fn(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}
