//! MST "double tree" heuristic.
//!
//! # Algorithm
//!
//! 1. Build a minimum spanning tree with [`prim_mst`].
//! 2. Order the nodes by a preorder walk of the tree ([`preorder_walk`]).
//! 3. Close the cycle and sum the true matrix costs along it.
//!
//! Step 3 shortcuts every return trip of the doubled tree with a direct
//! edge, so the tour cost is a sum of graph edges, not of tree weights.
//!
//! # Complexity
//!
//! O(n²).
//!
//! # Guarantee
//!
//! At most twice the optimal cost when the matrix satisfies the triangle
//! inequality. No bound otherwise.

use tracing::debug;

use super::{preorder_walk, prim_mst};
use crate::distance::CostMatrix;
use crate::models::Tour;

/// Builds a tour from the preorder walk of a minimum spanning tree.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::approximate::solve_approx;
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ])
/// .expect("square");
/// let tour = solve_approx(&cm);
/// assert_eq!(tour.nodes(), &[0, 1, 2, 3, 0]);
/// assert_eq!(tour.cost(), 95);
/// ```
pub fn solve_approx(costs: &CostMatrix) -> Tour {
    let tree = prim_mst(costs);
    let nodes = preorder_walk(&tree);
    let tour = Tour::from_nodes(nodes, costs);
    debug!(
        nodes = costs.size(),
        mst_weight = tree.total_weight(),
        tour_cost = tour.cost(),
        "double-tree tour built"
    );
    tour
}
