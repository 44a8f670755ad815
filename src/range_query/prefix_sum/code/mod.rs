//! Prefix sum table construction variants.

pub mod c_impl;
mod original;
mod scan;

pub use c_impl::{build_prefix_sum_c_original, C_IMPL_AVAILABLE};
pub use original::build_prefix_sum_original;
pub use scan::build_prefix_sum_scan;

use crate::utils::VariantInfo;

/// Signature shared by every table construction variant
pub type BuildPrefixSumFn = fn(&[i64]) -> Vec<i64>;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<BuildPrefixSumFn>> {
    let mut variants: Vec<VariantInfo<BuildPrefixSumFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Indexed loop over a zero-initialized table",
            function: build_prefix_sum_original,
        },
        VariantInfo {
            name: "scan",
            description: "Iterator scan chained after the leading zero",
            function: build_prefix_sum_scan,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C reference implementation",
            function: build_prefix_sum_c_original,
        });
    }

    variants
}
