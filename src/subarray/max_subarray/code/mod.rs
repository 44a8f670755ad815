//! Maximum subarray sum implementations.

pub mod c_impl;
mod divide_conquer;
mod fold;
mod original;

pub use c_impl::{max_subarray_sum_c_original, C_IMPL_AVAILABLE};
pub use divide_conquer::max_subarray_sum_divide_conquer;
pub use fold::max_subarray_sum_fold;
pub use original::max_subarray_sum_original;

use crate::error::Result;
use crate::utils::VariantInfo;

/// Signature shared by every maximum subarray variant
pub type MaxSubarrayFn = fn(&[i64]) -> Result<i64>;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<MaxSubarrayFn>> {
    let mut variants: Vec<VariantInfo<MaxSubarrayFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Kadane's algorithm, explicit loop",
            function: max_subarray_sum_original,
        },
        VariantInfo {
            name: "fold",
            description: "Kadane's algorithm as an iterator fold",
            function: max_subarray_sum_fold,
        },
        VariantInfo {
            name: "divide_conquer",
            description: "O(n log n) split at the midpoint",
            function: max_subarray_sum_divide_conquer,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C reference implementation",
            function: max_subarray_sum_c_original,
        });
    }

    variants
}
