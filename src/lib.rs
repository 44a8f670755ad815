//! # Sequence-Algo
//!
//! Binary search, prefix-sum range queries and Kadane's maximum subarray
//! over `i64` sequences, each with alternative variants that are verified
//! against a reference implementation and benchmarked side by side.

pub mod demo;
pub mod error;
pub mod range_query;
pub mod registry;
pub mod search;
pub mod subarray;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

pub use error::{AlgoError, Result};
pub use range_query::prefix_sum::{build_prefix_sum, range_sum, PrefixSumTable};
pub use search::binary_search::binary_search;
pub use subarray::max_subarray::{max_subarray, max_subarray_sum, Subarray};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{AlgoError, Result};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::{binary_search, build_prefix_sum, max_subarray_sum, range_sum, PrefixSumTable};
}
