//! Searching in sorted sequences.

pub mod binary_search;
