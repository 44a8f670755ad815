//! # Binary Search
//!
//! Finds the first occurrence of a target in a sequence sorted in
//! non-decreasing order, in `O(log n)` comparisons.
//!
//! ## Variants
//!
//! - **original**: classic interval halving with an explicit comparison branch
//! - **partition_point**: the standard library lower bound
//! - **branchless**: fixed trip count, conditional add instead of a branch
//! - **c-original**: the reference loop compiled by the C toolchain

pub mod code;
pub mod test;

pub use code::*;

use crate::error::Result;
use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::utils::bench::random_sorted_sequence;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Number of lookups performed by one measured run
const QUERIES_PER_RUN: usize = 256;

/// Lowest index `i` with `data[i] == target`, or `None` when absent.
///
/// `data` must be sorted in non-decreasing order; this is the caller's
/// responsibility and is not validated.
pub fn binary_search(data: &[i64], target: i64) -> Option<usize> {
    binary_search_original(data, target)
}

/// Query targets spread uniformly over the value range plus a small margin
/// on each side, so that some lookups miss.
fn generate_queries(data: &[i64], seed: u64) -> Vec<i64> {
    let lo = data.first().copied().unwrap_or(0) - 2;
    let hi = data.last().copied().unwrap_or(0) + 2;

    let mut rng = StdRng::seed_from_u64(seed);
    (0..QUERIES_PER_RUN).map(|_| rng.random_range(lo..=hi)).collect()
}

pub struct BinarySearchRunner;

impl AlgorithmRunner for BinarySearchRunner {
    fn name(&self) -> &'static str {
        "binary_search"
    }

    fn description(&self) -> &'static str {
        "First occurrence of a target in a sorted sequence"
    }

    fn category(&self) -> &'static str {
        "search"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize) -> Vec<VariantClosure<'a>> {
        let data: Arc<Vec<i64>> = Arc::new(random_sorted_sequence(size, 0x5eed_0001));
        let queries: Arc<Vec<i64>> = Arc::new(generate_queries(&data, 0x5eed_0002));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let data = Arc::clone(&data);
                let queries = Arc::clone(&queries);
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, found) = crate::measure!({
                            let mut found = 0usize;
                            for &target in queries.iter() {
                                if std::hint::black_box(func(&data, target)).is_some() {
                                    found += 1;
                                }
                            }
                            found
                        });
                        (elapsed, Some(found as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        test::verify_all()
    }
}
