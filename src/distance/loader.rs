//! Whitespace-separated text format for cost matrices.
//!
//! The number of tokens on the first line fixes the matrix size `n`. The
//! whole input, first line included, must then hold exactly `n * n`
//! non-negative integers in row-major order:
//!
//! ```text
//! 0 10 15 20
//! 10 0 35 25
//! 15 35 0 30
//! 20 25 30 0
//! ```
//!
//! Line breaks beyond the first carry no meaning; any whitespace separates
//! tokens.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::CostMatrix;
use crate::error::{Result, TspError};

/// Parses a cost matrix from text.
///
/// # Errors
///
/// - [`TspError::Empty`] if the first line has no tokens
/// - [`TspError::InvalidToken`] for any token that is not a `u32`
/// - [`TspError::WrongCount`] if the token total is not `n * n`
///
/// # Examples
///
/// ```
/// use u_tsp::distance::parse_matrix;
///
/// let cm = parse_matrix("0 5\n5 0\n").expect("valid matrix");
/// assert_eq!(cm.size(), 2);
/// assert_eq!(cm.get(0, 1), 5);
/// ```
pub fn parse_matrix(input: &str) -> Result<CostMatrix> {
    let size = input
        .lines()
        .next()
        .map(|line| line.split_whitespace().count())
        .unwrap_or(0);
    if size == 0 {
        return Err(TspError::Empty);
    }

    let data = input
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<u32>().map_err(|_| TspError::InvalidToken {
                position: i + 1,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // `size` is non-zero here, so `from_data` only rejects a token count
    // other than `size * size`.
    let found = data.len();
    let matrix = CostMatrix::from_data(size, data).ok_or(TspError::WrongCount {
        size,
        expected: size * size,
        found,
    })?;

    debug!(size, "parsed cost matrix");
    Ok(matrix)
}

/// Reads and parses a cost matrix file.
///
/// # Errors
///
/// [`TspError::Io`] if the file cannot be read, otherwise the errors of
/// [`parse_matrix`].
pub fn load_matrix(path: impl AsRef<Path>) -> Result<CostMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| TspError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_matrix(&text)
}
