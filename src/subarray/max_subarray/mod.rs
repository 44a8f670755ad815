//! # Maximum Subarray Sum
//!
//! Kadane's algorithm: the best run ending at position `i` is either
//! `data[i]` alone or `data[i]` appended to the best run ending at `i - 1`.
//! Keeping the maximum of those running values gives the answer in one
//! `O(n)` pass with `O(1)` extra space.
//!
//! Only non-empty runs count, so an all-negative sequence yields its
//! largest element, and an empty sequence is an error.

mod bounds;
pub mod code;
pub mod test;

pub use bounds::{max_subarray, Subarray};
pub use code::*;

use crate::error::Result;
use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::utils::bench::random_sequence;
use std::sync::Arc;

/// Maximum sum of any contiguous, non-empty subsequence of `data`.
///
/// Fails with [`AlgoError::EmptyInput`](crate::error::AlgoError::EmptyInput)
/// when `data` is empty.
pub fn max_subarray_sum(data: &[i64]) -> Result<i64> {
    max_subarray_sum_original(data)
}

pub struct MaxSubarrayRunner;

impl AlgorithmRunner for MaxSubarrayRunner {
    fn name(&self) -> &'static str {
        "max_subarray"
    }

    fn description(&self) -> &'static str {
        "Maximum sum of a contiguous non-empty subsequence"
    }

    fn category(&self) -> &'static str {
        "subarray"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize) -> Vec<VariantClosure<'a>> {
        // At least one element: an empty input would only time the error path
        let data: Arc<Vec<i64>> = Arc::new(random_sequence(size.max(1), 1_000, 0x5eed_0020));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let data = Arc::clone(&data);
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, result) = crate::measure!(func(&data));
                        (elapsed, result.ok().map(|sum| sum as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        test::verify_all()
    }
}
