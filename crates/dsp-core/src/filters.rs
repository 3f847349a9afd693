//! Moving-window smoothing filters.
//!
//! Both filters clip the requested width to the input length. With
//! `w = min(width, len)`:
//!
//! - `w <= 1` returns a copy of the input (so empty input gives empty output).
//! - otherwise the output has `len - w + 1` elements and output `i` summarizes
//!   the window `a[i..i + w]`.

#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::containers::copy;
use crate::error::{DspError, Result};
use crate::num::Real;
use crate::ordering::window_median;

/// Clip `width` to `len`, returning `None` when the filter degenerates to a
/// copy.
fn effective_width(width: isize, len: usize) -> Option<usize> {
    if width <= 1 {
        return None;
    }
    let w = (width as usize).min(len);
    (w > 1).then_some(w)
}

/// Moving average over windows of `width` elements.
///
/// Uses a sliding sum: the first window is summed left to right, then each
/// step adds the difference between the entering and the leaving element.
/// Every output is `sum / w`. Because the sum is carried forward, results can
/// differ in the last bits from averaging each window afresh.
///
/// # Example
///
/// ```rust
/// use dsp_core::filters::average_filter;
///
/// assert_eq!(average_filter(&[2.0, 4.0, 6.0, 8.0], 2), vec![3.0, 5.0, 7.0]);
/// assert_eq!(average_filter(&[1.0, 2.0, 3.0], 999), vec![2.0]);
/// ```
#[must_use]
pub fn average_filter<T: Real>(a: &[T], width: isize) -> Vec<T> {
    let Some(w) = effective_width(width, a.len()) else {
        return copy(a);
    };

    let divisor = T::from_count(w);
    let mut result = Vec::with_capacity(a.len() - w + 1);

    let mut sum = T::ZERO;
    for &value in &a[..w] {
        sum = sum + value;
    }
    result.push(sum / divisor);

    for i in 1..=(a.len() - w) {
        sum = sum + (a[i + w - 1] - a[i - 1]);
        result.push(sum / divisor);
    }

    result
}

/// Moving median over windows of `width` elements.
///
/// The median of a window is its element at index `w / 2` in ascending
/// order, which for even `w` is the upper of the two middle values. One
/// scratch buffer of `w` elements is reused across windows. The position of
/// NaN in the ordering is unspecified.
///
/// # Example
///
/// ```rust
/// use dsp_core::filters::median_filter;
///
/// assert_eq!(median_filter(&[2.0, 1.0, 30.0, 50.0, 44.0], 3), vec![2.0, 30.0, 44.0]);
/// assert_eq!(median_filter(&[1.0, 3.0, 2.0], 2), vec![3.0, 3.0]);
/// ```
#[must_use]
pub fn median_filter<T: Real>(a: &[T], width: isize) -> Vec<T> {
    let Some(w) = effective_width(width, a.len()) else {
        return copy(a);
    };

    let mut scratch = vec![T::ZERO; w];
    a.windows(w)
        .map(|window| {
            scratch.copy_from_slice(window);
            window_median(&mut scratch)
        })
        .collect()
}

/// Which smoothing filter a [`FilterConfig`] applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FilterKind {
    /// Moving average, see [`average_filter`].
    #[default]
    Average,
    /// Moving median, see [`median_filter`].
    Median,
}

/// Configuration for a windowed filter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterConfig {
    /// The filter to apply.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: FilterKind,
    /// Requested window width before clipping to the input length.
    pub width: isize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            kind: FilterKind::Average,
            width: 3,
        }
    }
}

impl FilterConfig {
    /// Create a configuration for the given filter and width.
    #[must_use]
    pub fn new(kind: FilterKind, width: isize) -> Self {
        Self { kind, width }
    }

    /// Moving average with the given width.
    #[must_use]
    pub fn average(width: isize) -> Self {
        Self::new(FilterKind::Average, width)
    }

    /// Moving median with the given width.
    #[must_use]
    pub fn median(width: isize) -> Self {
        Self::new(FilterKind::Median, width)
    }

    /// Set the window width.
    #[must_use]
    pub fn with_width(mut self, width: isize) -> Self {
        self.width = width;
        self
    }

    /// Check that the configuration describes a real window.
    ///
    /// The filters themselves accept any width; this is for configurations
    /// read from outside the program, where a width below 1 is a mistake.
    ///
    /// # Errors
    ///
    /// Returns [`DspError::InvalidParameter`] if `width < 1`.
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 {
            return Err(DspError::InvalidParameter {
                name: "width",
                value: self.width.to_string(),
                expected: "width >= 1",
            });
        }
        Ok(())
    }

    /// Run the configured filter over `a`.
    #[must_use]
    pub fn apply<T: Real>(&self, a: &[T]) -> Vec<T> {
        match self.kind {
            FilterKind::Average => average_filter(a, self.width),
            FilterKind::Median => median_filter(a, self.width),
        }
    }
}
