use crate::error::{AlgoError, Result};

/// Kadane's algorithm as a single `fold` over `(current, best)`.
///
/// A negative running sum is dropped before adding the next element,
/// which is the same choice as `max(num, current + num)`.
pub fn max_subarray_sum_fold(data: &[i64]) -> Result<i64> {
    let (&first, rest) = data.split_first().ok_or(AlgoError::EmptyInput)?;

    let (_, best) = rest.iter().fold((first, first), |(current, best), &num| {
        let current = current.max(0) + num;
        (current, best.max(current))
    });

    Ok(best)
}
