//! Error types for loading cost matrices.
//!
//! Solving never fails on a valid [`CostMatrix`](crate::distance::CostMatrix);
//! every variant here describes bad input caught before a solver runs.

use std::path::PathBuf;

use thiserror::Error;

/// Input error raised while reading or parsing a cost matrix.
#[derive(Debug, Error)]
pub enum TspError {
    /// The matrix file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The first line holds no tokens, so the matrix size is unknown.
    #[error("input is empty: the first line must list the first row of the matrix")]
    Empty,

    /// A token is not a non-negative integer.
    #[error("token {position} ({token:?}) is not a non-negative integer")]
    InvalidToken {
        /// 1-based position of the token in the whole input.
        position: usize,
        /// The offending text.
        token: String,
    },

    /// The input does not hold exactly `n * n` costs.
    #[error("expected {expected} costs for a {size}x{size} matrix, found {found}")]
    WrongCount {
        /// Matrix size taken from the first line.
        size: usize,
        /// `size * size`.
        expected: usize,
        /// Number of tokens actually present.
        found: usize,
    },
}

/// Result type alias for matrix loading.
pub type Result<T> = std::result::Result<T, TspError>;
