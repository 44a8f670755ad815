//! Owned prefix sum table with checked and unchecked range queries.

use super::code::build_prefix_sum_original;
use super::range_sum;
use crate::error::{AlgoError, Result};

/// Prefix sums of a sequence, built once and queried any number of times.
///
/// Holds `n + 1` entries for a sequence of length `n`; entry 0 is zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixSumTable {
    prefix: Vec<i64>,
}

impl PrefixSumTable {
    pub fn new(data: &[i64]) -> Self {
        Self {
            prefix: build_prefix_sum_original(data),
        }
    }

    /// Length of the original sequence
    pub fn len(&self) -> usize {
        self.prefix.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw table, `len() + 1` entries
    pub fn as_slice(&self) -> &[i64] {
        &self.prefix
    }

    /// Sum of the whole original sequence
    pub fn total(&self) -> i64 {
        self.prefix[self.len()]
    }

    /// Sum of `data[left..=right]`.
    ///
    /// Indices are not validated; out-of-range values panic on indexing or
    /// yield a meaningless result when `left > right`. Use
    /// [`try_range_sum`](Self::try_range_sum) for untrusted input.
    pub fn range_sum(&self, left: usize, right: usize) -> i64 {
        range_sum(&self.prefix, left, right)
    }

    /// Sum of `data[left..=right]`, rejecting invalid ranges.
    pub fn try_range_sum(&self, left: usize, right: usize) -> Result<i64> {
        if left > right {
            return Err(AlgoError::InvertedRange { left, right });
        }
        if right >= self.len() {
            return Err(AlgoError::RangeOutOfBounds {
                left,
                right,
                len: self.len(),
            });
        }
        Ok(self.range_sum(left, right))
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.prefix
    }
}

impl From<&[i64]> for PrefixSumTable {
    fn from(data: &[i64]) -> Self {
        Self::new(data)
    }
}
