//! Finite differences.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::containers::copy;
use crate::num::Real;

/// First differences: `b[i] = a[i + 1] - a[i]`.
///
/// Sequences shorter than two elements have no differences and yield zeros of
/// the same length, so a single element gives `[0]` rather than an empty
/// sequence.
#[must_use]
pub fn derivative<T: Real>(a: &[T]) -> Vec<T> {
    if a.len() <= 1 {
        return vec![T::ZERO; a.len()];
    }
    a.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Apply [`derivative`] `n` times.
///
/// Returns a copy of `a` if `n <= 0`. The length shrinks by one per step until
/// it reaches one, after which the result stays `[0]`.
///
/// # Example
///
/// ```rust
/// use dsp_core::differencing::nth_derivative;
///
/// let a = [1.0, 3.0, 4.0, 2.0];
/// assert_eq!(nth_derivative(&a, 2), vec![-1.0, -3.0]);
/// assert_eq!(nth_derivative(&a, 5), vec![0.0]);
/// ```
#[must_use]
pub fn nth_derivative<T: Real>(a: &[T], n: isize) -> Vec<T> {
    let mut result = copy(a);
    for _ in 0..n.max(0) {
        let saturated = result.len() <= 1;
        result = derivative(&result);
        if saturated {
            // Zeros of length <= 1 are a fixed point.
            break;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivative() {
        assert!(derivative::<f64>(&[]).is_empty());
        assert_eq!(derivative(&[1.0f64]), vec![0.0]);
        assert_eq!(derivative(&[1.0f64, 3.0]), vec![2.0]);
        assert_eq!(derivative(&[1.0f64, 3.0, 4.0]), vec![2.0, 1.0]);
        assert_eq!(derivative(&[1.0f64, 3.0, 4.0, 2.0]), vec![2.0, 1.0, -2.0]);
    }

    #[test]
    fn test_derivative_single_nan_is_zero() {
        assert_eq!(derivative(&[f32::NAN]), vec![0.0]);
    }

    #[test]
    fn test_nth_derivative() {
        let a = [1.0f64, 3.0, 4.0, 2.0];
        assert_eq!(nth_derivative(&a, -1), vec![1.0, 3.0, 4.0, 2.0]);
        assert_eq!(nth_derivative(&a, 0), vec![1.0, 3.0, 4.0, 2.0]);
        assert_eq!(nth_derivative(&a, 1), vec![2.0, 1.0, -2.0]);
        assert_eq!(nth_derivative(&a, 2), vec![-1.0, -3.0]);
        assert_eq!(nth_derivative(&a, 3), vec![-2.0]);
        assert_eq!(nth_derivative(&a, 4), vec![0.0]);
        assert_eq!(nth_derivative(&a, 5), vec![0.0]);
    }

    #[test]
    fn test_nth_derivative_large_count_saturates() {
        assert_eq!(nth_derivative(&[1.0f32, 2.0], isize::MAX), vec![0.0]);
        assert!(nth_derivative::<f64>(&[], 10).is_empty());
    }

    #[test]
    fn test_nth_derivative_clears_negative_zero() {
        let result = nth_derivative(&[-0.0f64], 1);
        assert_eq!(result, vec![0.0]);
        assert!(result[0].is_sign_positive());
    }

    #[test]
    fn test_nth_derivative_non_positive_returns_copy() {
        let mut a = vec![1.0f64, 2.0];
        let b = nth_derivative(&a, 0);
        a[0] = 9.0;
        assert_eq!(b, vec![1.0, 2.0]);
    }
}
