//! Reductions of a sequence to scalars: extrema and the arithmetic mean.
//!
//! Two shapes are offered for extremum search. [`extrema`] reports an empty
//! sequence as an error. [`min_max`] and its projections keep the legacy
//! in-band shape, where an empty sequence yields the sentinels
//! `(-1, +∞, -1, -∞)`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DspError, Result};
use crate::num::Real;

/// Positions and values of the first minimum and first maximum of a sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extrema<T: Real> {
    /// Index of the first occurrence of the minimum.
    pub min_index: usize,
    /// The minimum value.
    pub min_value: T,
    /// Index of the first occurrence of the maximum.
    pub max_index: usize,
    /// The maximum value.
    pub max_value: T,
}

/// Find the first minimum and first maximum of `a`.
///
/// The scan starts with both extrema at index 0 and only moves them on a
/// strict `<` or `>`, so ties keep the earliest index and NaN elements never
/// displace a running extremum. A NaN at index 0 is therefore reported as
/// both minimum and maximum.
///
/// # Errors
///
/// Returns [`DspError::EmptyInput`] if `a` is empty.
///
/// # Example
///
/// ```rust
/// use dsp_core::reductions::extrema;
///
/// let e = extrema(&[3.0, 2.0, 1.0, 3.0, 1.0, 4.0, 4.0]).unwrap();
/// assert_eq!((e.min_index, e.min_value), (2, 1.0));
/// assert_eq!((e.max_index, e.max_value), (5, 4.0));
/// ```
pub fn extrema<T: Real>(a: &[T]) -> Result<Extrema<T>> {
    let Some(&first) = a.first() else {
        return Err(DspError::EmptyInput {
            operation: "extrema",
        });
    };

    let mut result = Extrema {
        min_index: 0,
        min_value: first,
        max_index: 0,
        max_value: first,
    };

    for (i, &value) in a.iter().enumerate().skip(1) {
        if value < result.min_value {
            result.min_index = i;
            result.min_value = value;
        }
        if value > result.max_value {
            result.max_index = i;
            result.max_value = value;
        }
    }

    Ok(result)
}

/// Return `(min_index, min_value, max_index, max_value)` for `a`.
///
/// This is the legacy in-band shape of [`extrema`]: for an empty sequence it
/// returns `(-1, +∞, -1, -∞)` instead of an error.
#[must_use]
pub fn min_max<T: Real>(a: &[T]) -> (isize, T, isize, T) {
    match extrema(a) {
        Ok(e) => (
            e.min_index as isize,
            e.min_value,
            e.max_index as isize,
            e.max_value,
        ),
        Err(_) => (-1, T::INFINITY, -1, T::NEG_INFINITY),
    }
}

/// Index of the first minimum of `a`, or -1 if `a` is empty.
#[must_use]
pub fn min_index<T: Real>(a: &[T]) -> isize {
    min_max(a).0
}

/// Minimum value of `a`, or `+∞` if `a` is empty.
#[must_use]
pub fn min_value<T: Real>(a: &[T]) -> T {
    min_max(a).1
}

/// Index of the first maximum of `a`, or -1 if `a` is empty.
#[must_use]
pub fn max_index<T: Real>(a: &[T]) -> isize {
    min_max(a).2
}

/// Maximum value of `a`, or `-∞` if `a` is empty.
#[must_use]
pub fn max_value<T: Real>(a: &[T]) -> T {
    min_max(a).3
}

/// Arithmetic mean of `a`, or 0 if `a` is empty.
///
/// Sums left to right in `T` without compensation.
#[must_use]
pub fn average<T: Real>(a: &[T]) -> T {
    if a.is_empty() {
        return T::ZERO;
    }

    let mut sum = T::ZERO;
    for &value in a {
        sum = sum + value;
    }
    sum / T::from_count(a.len())
}
