//! Lower bound through the standard library.

/// Binary search built on [`slice::partition_point`].
pub fn binary_search_partition_point(data: &[i64], target: i64) -> Option<usize> {
    let idx = data.partition_point(|&v| v < target);
    (data.get(idx) == Some(&target)).then_some(idx)
}
