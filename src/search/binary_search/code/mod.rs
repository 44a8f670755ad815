//! Binary search implementations.

pub mod c_impl;
mod branchless;
mod original;
mod partition_point;

pub use branchless::binary_search_branchless;
pub use c_impl::{binary_search_c_original, C_IMPL_AVAILABLE};
pub use original::binary_search_original;
pub use partition_point::binary_search_partition_point;

use crate::utils::VariantInfo;

/// Signature shared by every binary search variant
pub type BinarySearchFn = fn(&[i64], i64) -> Option<usize>;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<BinarySearchFn>> {
    let mut variants: Vec<VariantInfo<BinarySearchFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Half-open interval lower bound, then equality check",
            function: binary_search_original,
        },
        VariantInfo {
            name: "partition_point",
            description: "std slice::partition_point lower bound",
            function: binary_search_partition_point,
        },
        VariantInfo {
            name: "branchless",
            description: "Length-halving lower bound with a conditional add",
            function: binary_search_branchless,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C reference implementation",
            function: binary_search_c_original,
        });
    }

    variants
}
