//! Tests for binary search implementations

use super::code::{available_variants, binary_search_original};
use crate::error::{AlgoError, Result};
use crate::utils::bench::random_sorted_sequence;

/// Verify all variants return the same index as the original for every
/// target in and around the value range of several sorted inputs.
pub fn verify_all() -> Result<()> {
    let mut inputs: Vec<Vec<i64>> = vec![
        vec![],
        vec![7],
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
        vec![3, 3, 3, 3],
        vec![-9, -9, -4, 0, 0, 0, 2, 11, 11],
    ];
    for (i, size) in [2usize, 31, 64, 257, 1000].into_iter().enumerate() {
        inputs.push(random_sorted_sequence(size, 0xb5 + i as u64));
    }

    for variant in available_variants() {
        if variant.name == "original" {
            continue;
        }

        for data in &inputs {
            let lo = data.first().copied().unwrap_or(0) - 3;
            let hi = data.last().copied().unwrap_or(0) + 3;

            for target in lo..=hi {
                let expected = binary_search_original(data, target);
                let actual = (variant.function)(data, target);

                if actual != expected {
                    return Err(AlgoError::VerificationFailed {
                        algorithm: "binary_search",
                        variant: variant.name,
                        detail: format!(
                            "target {} in sequence of length {}: expected {:?}, got {:?}",
                            target,
                            data.len(),
                            expected,
                            actual
                        ),
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::binary_search::binary_search;

    const DIGITS: [i64; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_found() {
        assert_eq!(binary_search(&DIGITS, 5), Some(4));
        assert_eq!(binary_search(&DIGITS, 1), Some(0));
        assert_eq!(binary_search(&DIGITS, 9), Some(8));
    }

    #[test]
    fn test_not_found() {
        assert_eq!(binary_search(&DIGITS, 10), None);
        assert_eq!(binary_search(&DIGITS, 0), None);
        assert_eq!(binary_search(&[1, 3, 5], 4), None);
    }

    #[test]
    fn test_empty() {
        for variant in available_variants() {
            assert_eq!((variant.function)(&[], 1), None, "{}", variant.name);
        }
    }

    #[test]
    fn test_duplicates_return_first_occurrence() {
        let data = [1, 2, 2, 2, 2, 3, 8, 8];
        for variant in available_variants() {
            assert_eq!((variant.function)(&data, 2), Some(1), "{}", variant.name);
            assert_eq!((variant.function)(&data, 8), Some(6), "{}", variant.name);
        }

        let all_same = [4; 17];
        assert_eq!(binary_search(&all_same, 4), Some(0));
    }

    #[test]
    fn test_extreme_values() {
        let data = [i64::MIN, -1, 0, i64::MAX];
        for variant in available_variants() {
            assert_eq!((variant.function)(&data, i64::MIN), Some(0), "{}", variant.name);
            assert_eq!((variant.function)(&data, i64::MAX), Some(3), "{}", variant.name);
            assert_eq!((variant.function)(&data, 1), None, "{}", variant.name);
        }
    }
}
