//! Branchless lower bound.
//!
//! The loop runs exactly `ceil(log2(n))` times regardless of the data, and
//! the only data-dependent step is a conditional add that compiles to a
//! `cmov`, so there is nothing for the branch predictor to miss.

/// Binary search by halving the remaining length.
///
/// Invariant: the lower bound lies in `[base, base + len]`.
pub fn binary_search_branchless(data: &[i64], target: i64) -> Option<usize> {
    if data.is_empty() {
        return None;
    }

    let mut base = 0usize;
    let mut len = data.len();

    while len > 1 {
        let half = len / 2;
        if data[base + half - 1] < target {
            base += half;
        }
        len -= half;
    }

    let idx = base + (data[base] < target) as usize;
    (idx < data.len() && data[idx] == target).then_some(idx)
}
