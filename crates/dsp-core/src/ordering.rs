//! Ordering adapter over [`Real`] used by the median filter.

use core::cmp::Ordering;

use crate::num::Real;

/// Ascending order over `Real` values.
///
/// Agrees with `<` on all non-NaN pairs except that `-0` sorts before `+0`,
/// which never changes the selected value since the two compare equal.
#[inline]
pub(crate) fn ascending<T: Real>(a: &T, b: &T) -> Ordering {
    a.total_cmp_fn(b)
}

/// Median of a window: the element at index `len / 2` in ascending order.
///
/// For even lengths this is the upper of the two central values. The slice
/// is reordered in place and must not be empty.
pub(crate) fn window_median<T: Real>(scratch: &mut [T]) -> T {
    let mid = scratch.len() / 2;
    let (_, median, _) = scratch.select_nth_unstable_by(mid, ascending);
    *median
}
