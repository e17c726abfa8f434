//! Cost matrices.
//!
//! Provides the dense cost matrix both solvers operate on and the loader
//! for its whitespace-separated text format.

mod loader;
mod matrix;

pub use loader::{load_matrix, parse_matrix};
pub use matrix::CostMatrix;
