use crate::error::{AlgoError, Result};

/// A maximal run: its sum and inclusive index bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subarray {
    pub sum: i64,
    pub start: usize,
    pub end: usize,
}

#[allow(clippy::len_without_is_empty)]
impl Subarray {
    /// Number of elements in the run
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// The run as a slice of the sequence it was computed from
    pub fn slice<'a>(&self, data: &'a [i64]) -> &'a [i64] {
        &data[self.start..=self.end]
    }
}

/// Kadane's algorithm, also tracking where the best run starts and ends.
///
/// Among runs with the maximum sum, returns the one with the lowest end
/// index, and for that end the lowest start (a zero-sum prefix is kept).
pub fn max_subarray(data: &[i64]) -> Result<Subarray> {
    let first = *data.first().ok_or(AlgoError::EmptyInput)?;

    let mut best = Subarray {
        sum: first,
        start: 0,
        end: 0,
    };
    let mut current = first;
    let mut current_start = 0;

    for (i, &num) in data.iter().enumerate().skip(1) {
        if current < 0 {
            current = num;
            current_start = i;
        } else {
            current += num;
        }

        if current > best.sum {
            best = Subarray {
                sum: current,
                start: current_start,
                end: i,
            };
        }
    }

    Ok(best)
}
