//! Element-wise arithmetic across any number of sequences.
//!
//! Inputs of different lengths are truncated to the shortest one. Passing no
//! sequences at all gives an empty result.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::num::Real;

/// Length of the shortest sequence, or 0 when there are none.
fn common_len<T: Real, S: AsRef<[T]>>(sequences: &[S]) -> usize {
    sequences
        .iter()
        .map(|s| s.as_ref().len())
        .min()
        .unwrap_or(0)
}

/// Element-wise sum of all `sequences`.
///
/// Element `i` is accumulated from zero over the sequences in argument order.
///
/// # Example
///
/// ```rust
/// use dsp_core::arithmetic::add;
///
/// let a = vec![1.0f64, 2.0];
/// let b = vec![4.0, 7.0, 9.0];
/// assert_eq!(add(&[a, b]), vec![5.0, 9.0]);
/// ```
#[must_use]
pub fn add<T: Real, S: AsRef<[T]>>(sequences: &[S]) -> Vec<T> {
    let n = common_len::<T, S>(sequences);
    let mut sum = vec![T::ZERO; n];
    for (i, total) in sum.iter_mut().enumerate() {
        for s in sequences {
            *total = *total + s.as_ref()[i];
        }
    }
    sum
}

/// Subtract every later sequence from the first, element-wise.
///
/// Element `i` starts from `sequences[0][i]` and subtracts the remaining
/// sequences in argument order. A single sequence is returned unchanged.
///
/// # Example
///
/// ```rust
/// use dsp_core::arithmetic::sub;
///
/// let r: Vec<f64> = sub(&[&[5.0][..], &[1.0][..], &[2.0][..]]);
/// assert_eq!(r, vec![2.0]);
/// ```
#[must_use]
pub fn sub<T: Real, S: AsRef<[T]>>(sequences: &[S]) -> Vec<T> {
    let Some((first, rest)) = sequences.split_first() else {
        return Vec::new();
    };

    let n = common_len::<T, S>(sequences);
    let mut diff = first.as_ref()[..n].to_vec();
    for (i, value) in diff.iter_mut().enumerate() {
        for s in rest {
            *value = *value - s.as_ref()[i];
        }
    }
    diff
}
