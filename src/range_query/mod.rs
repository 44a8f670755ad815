//! Range queries answered from precomputed tables.

pub mod prefix_sum;
