//! Tests for prefix sum implementations

use super::code::{available_variants, build_prefix_sum_original};
use crate::error::{AlgoError, Result};
use crate::utils::bench::random_sequence;

/// Verify all variants build the same table as the original
pub fn verify_all() -> Result<()> {
    let mut inputs: Vec<Vec<i64>> = vec![vec![], vec![-4], vec![1, 2, 3, 4, 5], vec![0, 0, 0]];
    for (i, size) in [3usize, 100, 1023].into_iter().enumerate() {
        inputs.push(random_sequence(size, 1_000_000, 0x9f + i as u64));
    }

    for variant in available_variants() {
        if variant.name == "original" {
            continue;
        }

        for data in &inputs {
            let expected = build_prefix_sum_original(data);
            let actual = (variant.function)(data);

            if actual != expected {
                let first_diff = expected
                    .iter()
                    .zip(actual.iter())
                    .position(|(e, a)| e != a)
                    .unwrap_or(expected.len().min(actual.len()));
                return Err(AlgoError::VerificationFailed {
                    algorithm: "prefix_sum",
                    variant: variant.name,
                    detail: format!(
                        "input of length {}: tables differ at index {} (lengths {} vs {})",
                        data.len(),
                        first_diff,
                        expected.len(),
                        actual.len()
                    ),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range_query::prefix_sum::{build_prefix_sum, range_sum, PrefixSumTable};

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_table_shape() {
        for variant in available_variants() {
            let table = (variant.function)(&[1, 2, 3, 4, 5]);
            assert_eq!(table, vec![0, 1, 3, 6, 10, 15], "{}", variant.name);
        }
    }

    #[test]
    fn test_empty_input() {
        for variant in available_variants() {
            assert_eq!((variant.function)(&[]), vec![0], "{}", variant.name);
        }
        let table = PrefixSumTable::new(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_range_sum() {
        let prefix = build_prefix_sum(&[1, 2, 3, 4, 5]);
        // 2 + 3 + 4
        assert_eq!(range_sum(&prefix, 1, 3), 9);
        assert_eq!(range_sum(&prefix, 0, 4), 15);
        assert_eq!(range_sum(&prefix, 2, 2), 3);
    }

    #[test]
    fn test_range_sum_with_negatives() {
        let prefix = build_prefix_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]);
        assert_eq!(range_sum(&prefix, 3, 6), 6);
        assert_eq!(range_sum(&prefix, 0, 2), -4);
    }

    #[test]
    #[should_panic]
    fn test_range_sum_out_of_bounds_panics() {
        let prefix = build_prefix_sum(&[1, 2, 3]);
        range_sum(&prefix, 0, 3);
    }

    #[test]
    fn test_table_queries() {
        let data = [5, -1, 7, 0, 3];
        let table = PrefixSumTable::from(&data[..]);

        assert_eq!(table.len(), 5);
        assert_eq!(table.total(), 14);
        assert_eq!(table.as_slice(), &[0, 5, 4, 11, 11, 14]);
        assert_eq!(table.range_sum(1, 2), 6);
        assert_eq!(table.try_range_sum(0, 4).unwrap(), 14);
    }

    #[test]
    fn test_try_range_sum_rejects_invalid_ranges() {
        let table = PrefixSumTable::new(&[1, 2, 3]);

        assert!(matches!(
            table.try_range_sum(2, 1),
            Err(AlgoError::InvertedRange { left: 2, right: 1 })
        ));
        assert!(matches!(
            table.try_range_sum(1, 3),
            Err(AlgoError::RangeOutOfBounds { len: 3, .. })
        ));
        assert!(matches!(
            PrefixSumTable::new(&[]).try_range_sum(0, 0),
            Err(AlgoError::RangeOutOfBounds { len: 0, .. })
        ));
    }

    #[test]
    fn test_into_inner_matches_free_function() {
        let data = [9, 8, 7];
        assert_eq!(PrefixSumTable::new(&data).into_inner(), build_prefix_sum(&data));
    }
}
