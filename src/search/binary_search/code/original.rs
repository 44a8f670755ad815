//! Original (reference) implementation of binary search.

/// Lowest index `i` with `data[i] == target`, or `None`.
///
/// The search interval `[left, right)` shrinks until `left` is the first
/// position whose value is `>= target`; equality is checked once at the
/// end, which is what makes duplicates resolve to their first occurrence.
///
/// `data` must be sorted in non-decreasing order. This is not checked;
/// on unsorted input the result is unspecified.
///
/// # Example
/// ```
/// use sequence_algo::search::binary_search::binary_search_original;
///
/// let data = [1, 2, 2, 2, 5];
/// assert_eq!(binary_search_original(&data, 2), Some(1));
/// assert_eq!(binary_search_original(&data, 3), None);
/// ```
pub fn binary_search_original(data: &[i64], target: i64) -> Option<usize> {
    let mut left = 0;
    let mut right = data.len();

    while left < right {
        let mid = left + (right - left) / 2;

        if data[mid] < target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    (left < data.len() && data[left] == target).then_some(left)
}
