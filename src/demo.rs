//! Fixed-input demonstration of the three algorithms.

use crate::error::Result;
use crate::range_query::prefix_sum::{build_prefix_sum, range_sum};
use crate::search::binary_search::binary_search;
use crate::subarray::max_subarray::max_subarray_sum;

/// The demonstration output, one line per algorithm.
///
/// A missing search result is rendered as `-1`.
pub fn demo_lines() -> Result<Vec<String>> {
    let sorted = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    let found = binary_search(&sorted, 5).map_or(-1, |i| i as i64);

    let values = [1, 2, 3, 4, 5];
    let prefix = build_prefix_sum(&values);

    let mixed = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
    let best = max_subarray_sum(&mixed)?;

    Ok(vec![
        format!("Binary search for 5: {}", found),
        format!("Sum [1, 3]: {}", range_sum(&prefix, 1, 3)),
        format!("Max subarray sum: {}", best),
    ])
}

/// Print the demonstration to stdout
pub fn run_demo() -> Result<()> {
    for line in demo_lines()? {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        assert_eq!(
            demo_lines().unwrap(),
            vec![
                "Binary search for 5: 4",
                "Sum [1, 3]: 9",
                "Max subarray sum: 6",
            ]
        );
    }
}
