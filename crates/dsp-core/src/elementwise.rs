//! Element-wise unary transformations.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::num::Real;

/// Negate every element of `a`.
#[must_use]
pub fn negative<T: Real>(a: &[T]) -> Vec<T> {
    a.iter().map(|&x| -x).collect()
}

/// Absolute value of every element of `a`.
///
/// Uses the same IEEE rules as [`abs_value`].
#[must_use]
pub fn abs<T: Real>(a: &[T]) -> Vec<T> {
    a.iter().map(|&x| abs_value(x)).collect()
}

/// Absolute value of a scalar.
///
/// Clears the sign bit, so `-0` maps to `+0`, `-∞` to `+∞` and NaN stays
/// NaN.
///
/// # Example
///
/// ```rust
/// use dsp_core::elementwise::abs_value;
///
/// assert_eq!(abs_value(f64::NEG_INFINITY), f64::INFINITY);
/// assert!(abs_value(f64::NAN).is_nan());
/// ```
#[inline]
#[must_use]
pub fn abs_value<T: Real>(x: T) -> T {
    x.abs()
}

/// Add `offset` to every element of `a`.
#[must_use]
pub fn add_offset<T: Real>(a: &[T], offset: T) -> Vec<T> {
    a.iter().map(|&x| x + offset).collect()
}

/// Multiply every element of `a` by `factor`.
#[must_use]
pub fn scale<T: Real>(a: &[T], factor: T) -> Vec<T> {
    a.iter().map(|&x| x * factor).collect()
}
