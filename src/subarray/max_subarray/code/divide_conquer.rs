//! Divide and conquer maximum subarray.
//!
//! `O(n log n)`: the best run lies entirely in the left half, entirely in
//! the right half, or crosses the midpoint, in which case it is the best
//! suffix of the left half joined to the best prefix of the right half.

use crate::error::{AlgoError, Result};

pub fn max_subarray_sum_divide_conquer(data: &[i64]) -> Result<i64> {
    if data.is_empty() {
        return Err(AlgoError::EmptyInput);
    }
    Ok(solve(data))
}

/// `data` is never empty here.
///
/// Crossing sums are accumulated in `i128`: a suffix or prefix of very
/// negative values can leave the `i64` range even when the answer doesn't.
fn solve(data: &[i64]) -> i64 {
    if data.len() == 1 {
        return data[0];
    }

    let (left, right) = data.split_at(data.len() / 2);

    let mut acc = 0i128;
    let mut best_suffix = i128::MIN;
    for &v in left.iter().rev() {
        acc += v as i128;
        best_suffix = best_suffix.max(acc);
    }

    acc = 0;
    let mut best_prefix = i128::MIN;
    for &v in right {
        acc += v as i128;
        best_prefix = best_prefix.max(acc);
    }

    let crossing = (best_suffix + best_prefix).clamp(i64::MIN as i128, i64::MAX as i128) as i64;
    solve(left).max(solve(right)).max(crossing)
}
