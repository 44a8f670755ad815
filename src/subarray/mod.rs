//! Contiguous subsequence problems.

pub mod max_subarray;
