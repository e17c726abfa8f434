//! Approximate solver based on a minimum spanning tree.
//!
//! - [`prim_mst`] — Prim's algorithm on the dense matrix, O(n²)
//! - [`preorder_walk`] — Depth-first preorder of the tree, O(n)
//! - [`solve_approx`] — Double-tree tour, 2-approximation on metric inputs

mod double_tree;
mod preorder;
mod prim;

pub use double_tree::solve_approx;
pub use preorder::preorder_walk;
pub use prim::{prim_mst, SpanningTree};
