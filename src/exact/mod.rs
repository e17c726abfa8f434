//! Exact solver.
//!
//! - [`solve_exact`] — Depth-first branch-and-bound, O((n-1)!) worst case

mod branch_and_bound;

pub use branch_and_bound::solve_exact;
