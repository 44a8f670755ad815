//! Tests for maximum subarray implementations

use super::code::{available_variants, max_subarray_sum_original};
use crate::error::{AlgoError, Result};
use crate::utils::bench::random_sequence;

/// Verify all variants agree with the original, including on empty input
pub fn verify_all() -> Result<()> {
    let mut inputs: Vec<Vec<i64>> = vec![
        vec![],
        vec![0],
        vec![-3],
        vec![-2, 1, -3, 4, -1, 2, 1, -5, 4],
        vec![-5, -2, -8],
        vec![2, 2, 2, 2],
        vec![i64::MIN, -1],
        vec![-(1 << 62); 3],
    ];
    for (i, size) in [2usize, 17, 128, 999].into_iter().enumerate() {
        inputs.push(random_sequence(size, 50, 0x4d + i as u64));
    }

    for variant in available_variants() {
        if variant.name == "original" {
            continue;
        }

        for data in &inputs {
            let expected = max_subarray_sum_original(data).ok();
            let actual = (variant.function)(data).ok();

            if actual != expected {
                return Err(AlgoError::VerificationFailed {
                    algorithm: "max_subarray",
                    variant: variant.name,
                    detail: format!(
                        "input of length {}: expected {:?}, got {:?}",
                        data.len(),
                        expected,
                        actual
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
    use crate::subarray::max_subarray::{max_subarray, max_subarray_sum, Subarray};

    fn brute_force(data: &[i64]) -> i64 {
        let mut best = i64::MIN;
        for start in 0..data.len() {
            let mut sum = 0;
            for &v in &data[start..] {
                sum += v;
                best = best.max(sum);
            }
        }
        best
    }

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_classic_example() {
        // [4, -1, 2, 1]
        for variant in available_variants() {
            assert_eq!(
                (variant.function)(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]).unwrap(),
                6,
                "{}",
                variant.name
            );
        }
    }

    #[test]
    fn test_all_negative_returns_largest_element() {
        for variant in available_variants() {
            assert_eq!((variant.function)(&[-5, -2, -8]).unwrap(), -2, "{}", variant.name);
            assert_eq!((variant.function)(&[-7]).unwrap(), -7, "{}", variant.name);
        }
    }

    #[test]
    fn test_large_negative_values_do_not_overflow() {
        for variant in available_variants() {
            assert_eq!((variant.function)(&[i64::MIN, -1]).unwrap(), -1, "{}", variant.name);
            assert_eq!(
                (variant.function)(&[-(1 << 62), -(1 << 62), -(1 << 62)]).unwrap(),
                -(1 << 62),
                "{}",
                variant.name
            );
        }
        assert_eq!(max_subarray_sum(&[i64::MIN, -1]).unwrap(), -1);
        assert_eq!(max_subarray(&[i64::MIN, -1]).unwrap().sum, -1);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        for variant in available_variants() {
            assert!(
                matches!((variant.function)(&[]), Err(AlgoError::EmptyInput)),
                "{}",
                variant.name
            );
        }
        assert!(matches!(max_subarray(&[]), Err(AlgoError::EmptyInput)));
    }

    #[test]
    fn test_matches_brute_force() {
        for seed in 0..50u64 {
            let data = random_sequence(1 + (seed as usize % 24), 20, seed);
            assert_eq!(max_subarray_sum(&data).unwrap(), brute_force(&data), "{:?}", data);
        }
    }

    #[test]
    fn test_bounds_of_classic_example() {
        let data = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
        let best = max_subarray(&data).unwrap();
        assert_eq!(
            best,
            Subarray {
                sum: 6,
                start: 3,
                end: 6
            }
        );
        assert_eq!(best.slice(&data), &[4, -1, 2, 1]);
        assert_eq!(best.len(), 4);
    }

    #[test]
    fn test_bounds_prefer_earliest_run() {
        // Two runs of sum 5; the first one ends earlier
        let best = max_subarray(&[5, -10, 5]).unwrap();
        assert_eq!((best.start, best.end), (0, 0));

        // Same end: the zero-sum prefix is kept, so the lowest start wins
        let best = max_subarray(&[0, 3]).unwrap();
        assert_eq!((best.start, best.end), (0, 1));
        let best = max_subarray(&[2, -2, 3]).unwrap();
        assert_eq!((best.sum, best.start, best.end), (3, 0, 2));

        // All-negative: the single largest element
        let best = max_subarray(&[-5, -2, -8]).unwrap();
        assert_eq!((best.sum, best.start, best.end), (-2, 1, 1));
    }

    #[test]
    fn test_bounds_sum_agrees_with_slice() {
        for seed in 100..140u64 {
            let data = random_sequence(1 + (seed as usize % 31), 15, seed);
            let best = max_subarray(&data).unwrap();
            assert_eq!(best.sum, max_subarray_sum(&data).unwrap());
            assert_eq!(best.slice(&data).iter().sum::<i64>(), best.sum);
        }
    }
}
