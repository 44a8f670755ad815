//! Original (reference) implementation of Kadane's algorithm.

use crate::error::{AlgoError, Result};

/// Maximum sum over all contiguous, non-empty subsequences of `data`.
///
/// `current` is the best sum of a run ending at the element being visited:
/// either the element alone or the element appended to the previous run.
/// A negative run is dropped before the element is added, so the running
/// sum never goes below what the element alone gives.
/// `best` starts at the first element, never at zero, so an all-negative
/// input yields its largest element instead of the empty-run sum.
///
/// # Errors
/// [`AlgoError::EmptyInput`] when `data` is empty.
///
/// # Example
/// ```
/// use sequence_algo::subarray::max_subarray::max_subarray_sum_original;
///
/// assert_eq!(max_subarray_sum_original(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]).unwrap(), 6);
/// assert_eq!(max_subarray_sum_original(&[-5, -2, -8]).unwrap(), -2);
/// assert!(max_subarray_sum_original(&[]).is_err());
/// ```
pub fn max_subarray_sum_original(data: &[i64]) -> Result<i64> {
    let mut best = *data.first().ok_or(AlgoError::EmptyInput)?;
    let mut current = 0;

    for &num in data {
        current = current.max(0) + num;
        best = best.max(current);
    }

    Ok(best)
}
