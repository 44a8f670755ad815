//! Original (reference) implementation of the prefix sum table.

/// Build the prefix sum table of `data`.
///
/// The result has `data.len() + 1` entries: `prefix[0] == 0` and
/// `prefix[i] == prefix[i - 1] + data[i - 1]`. Sums use plain `i64`
/// arithmetic (overflow panics in debug builds and wraps in release).
///
/// # Example
/// ```
/// use sequence_algo::range_query::prefix_sum::build_prefix_sum_original;
///
/// assert_eq!(build_prefix_sum_original(&[1, 2, 3]), vec![0, 1, 3, 6]);
/// ```
pub fn build_prefix_sum_original(data: &[i64]) -> Vec<i64> {
    let n = data.len();
    let mut prefix = vec![0; n + 1];

    for i in 1..=n {
        prefix[i] = prefix[i - 1] + data[i - 1];
    }

    prefix
}
