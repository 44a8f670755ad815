//! # Prefix Sum Range Queries
//!
//! One `O(n)` pass builds `prefix[i] = data[0] + ... + data[i - 1]`, after
//! which the sum of any closed range `[left, right]` is
//! `prefix[right + 1] - prefix[left]`, answered in `O(1)` at the cost of
//! `n + 1` extra integers.
//!
//! The benchmark measures table construction followed by a fixed batch of
//! range queries, so construction dominates for large inputs.

pub mod code;
mod table;
pub mod test;

pub use code::*;
pub use table::PrefixSumTable;

use crate::error::Result;
use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::utils::bench::random_sequence;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Range queries answered by one measured run
const QUERIES_PER_RUN: usize = 64;

/// Build the prefix sum table of `data` (`data.len() + 1` entries, first is 0).
pub fn build_prefix_sum(data: &[i64]) -> Vec<i64> {
    build_prefix_sum_original(data)
}

/// Sum of the original elements in the closed range `[left, right]`.
///
/// `prefix` is a table from [`build_prefix_sum`]. The caller guarantees
/// `left <= right < prefix.len() - 1`; this is not validated.
pub fn range_sum(prefix: &[i64], left: usize, right: usize) -> i64 {
    prefix[right + 1] - prefix[left]
}

/// Random valid `(left, right)` pairs for a sequence of length `len`
fn generate_ranges(len: usize, seed: u64) -> Vec<(usize, usize)> {
    if len == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (0..QUERIES_PER_RUN)
        .map(|_| {
            let a = rng.random_range(0..len);
            let b = rng.random_range(0..len);
            (a.min(b), a.max(b))
        })
        .collect()
}

pub struct PrefixSumRunner;

impl AlgorithmRunner for PrefixSumRunner {
    fn name(&self) -> &'static str {
        "prefix_sum"
    }

    fn description(&self) -> &'static str {
        "Prefix sum table construction plus O(1) range-sum queries"
    }

    fn category(&self) -> &'static str {
        "range_query"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize) -> Vec<VariantClosure<'a>> {
        let data: Arc<Vec<i64>> = Arc::new(random_sequence(size, 1_000, 0x5eed_0010));
        let ranges: Arc<Vec<(usize, usize)>> = Arc::new(generate_ranges(size, 0x5eed_0011));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let data = Arc::clone(&data);
                let ranges = Arc::clone(&ranges);
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, checksum) = crate::measure!({
                            let prefix = func(&data);
                            ranges
                                .iter()
                                .map(|&(l, r)| range_sum(&prefix, l, r))
                                .fold(0i64, i64::wrapping_add)
                        });
                        (elapsed, Some(checksum as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        test::verify_all()
    }
}
