//! Preorder walk of a spanning tree.

use super::SpanningTree;

/// Walks `tree` depth first from node 0 and returns the closed node order.
///
/// A node is emitted the first time it is reached; children are explored in
/// increasing index order. The walk ends by returning to node 0, so the
/// result has `n + 1` entries for a connected tree of `n` nodes.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::approximate::{preorder_walk, prim_mst};
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0, 1, 4],
///     vec![1, 0, 2],
///     vec![4, 2, 0],
/// ])
/// .expect("square");
/// assert_eq!(preorder_walk(&prim_mst(&cm)), vec![0, 1, 2, 0]);
/// ```
pub fn preorder_walk(tree: &SpanningTree) -> Vec<usize> {
    let n = tree.size();
    let mut order = Vec::with_capacity(n + 1);
    if n == 0 {
        return order;
    }

    let mut visited = vec![false; n];
    let mut stack = vec![0];
    while let Some(v) = stack.pop() {
        if visited[v] {
            continue;
        }
        visited[v] = true;
        order.push(v);
        // Reversed so the smallest neighbour is popped first.
        stack.extend(tree.neighbors(v).iter().rev().filter(|&&w| !visited[w]));
    }

    order.push(0);
    order
}
