//! Error type shared by the algorithms and the benchmark harness.

use thiserror::Error;

/// Errors reported by the library.
#[derive(Debug, Error)]
pub enum AlgoError {
    /// Maximum subarray of an empty sequence.
    #[error("input sequence is empty")]
    EmptyInput,

    #[error("range [{left}, {right}] is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds {
        left: usize,
        right: usize,
        len: usize,
    },

    #[error("range [{left}, {right}] has left > right")]
    InvertedRange { left: usize, right: usize },

    /// A variant disagreed with the reference implementation.
    #[error("variant '{variant}' of '{algorithm}' failed verification: {detail}")]
    VerificationFailed {
        algorithm: &'static str,
        variant: &'static str,
        detail: String,
    },

    #[error("algorithm '{name}' not found (available: {available})")]
    UnknownAlgorithm { name: String, available: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AlgoError>;
