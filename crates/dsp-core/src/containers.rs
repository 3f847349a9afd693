//! Sequence construction and rearrangement.
//!
//! Every function here returns a freshly allocated `Vec` that shares no
//! storage with its input.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::num::Real;

/// Return a copy of `a`.
///
/// # Example
///
/// ```rust
/// use dsp_core::containers::copy;
///
/// let a = [1.0, 2.0, 3.0];
/// let mut b = copy(&a);
/// b[1] = 0.0;
/// assert_eq!(a, [1.0, 2.0, 3.0]);
/// ```
#[must_use]
pub fn copy<T: Real>(a: &[T]) -> Vec<T> {
    a.to_vec()
}

/// Create a sequence of length `n` with every element set to `x`.
///
/// Returns an empty sequence if `n <= 0`.
#[must_use]
pub fn repeat<T: Real>(x: T, n: isize) -> Vec<T> {
    if n <= 0 {
        return Vec::new();
    }
    vec![x; n as usize]
}

/// Return the elements of `x` in reverse order.
#[must_use]
pub fn reverse<T: Real>(x: &[T]) -> Vec<T> {
    x.iter().rev().copied().collect()
}

/// Enumerate the integers from `a` to `b`, both inclusive.
///
/// Counts up when `a <= b` and down otherwise, so the result always holds
/// `|a - b| + 1` elements.
///
/// # Example
///
/// ```rust
/// use dsp_core::containers::range;
///
/// let r: Vec<f64> = range(3, -2);
/// assert_eq!(r, vec![3.0, 2.0, 1.0, 0.0, -1.0, -2.0]);
/// ```
#[must_use]
pub fn range<T: Real>(a: i64, b: i64) -> Vec<T> {
    if a <= b {
        (a..=b).map(T::from_int).collect()
    } else {
        (b..=a).rev().map(T::from_int).collect()
    }
}

/// Take every `n`th element of `a`, starting with the first.
///
/// The result has `ceil(len / n)` elements. Returns an empty sequence if
/// `n <= 0`.
#[must_use]
pub fn every_nth<T: Real>(a: &[T], n: isize) -> Vec<T> {
    if n <= 0 {
        return Vec::new();
    }
    a.iter().step_by(n as usize).copied().collect()
}
