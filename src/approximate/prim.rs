//! Minimum spanning tree via Prim's algorithm on a dense matrix.
//!
//! # Algorithm
//!
//! Grow a single tree from node 0. `key[v]` holds the cheapest known edge
//! joining `v` to the tree and `parent[v]` the tree node at its other end.
//! Each round adds the cheapest unused node and relaxes its neighbours.
//!
//! # Complexity
//!
//! O(n²), the best possible for a dense matrix.
//!
//! # Reference
//!
//! Prim, R.C. (1957). "Shortest connection networks and some
//! generalizations", *Bell System Technical Journal* 36(6), 1389-1401.

use crate::distance::CostMatrix;

/// A spanning tree over the nodes of a [`CostMatrix`], rooted at node 0.
///
/// Edges are undirected: every tree edge appears in the adjacency lists of
/// both endpoints, sorted by node index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    parent: Vec<Option<usize>>,
    adjacency: Vec<Vec<usize>>,
    edges: Vec<(usize, usize, u64)>,
}

impl SpanningTree {
    fn from_parents(parent: Vec<Option<usize>>, costs: &CostMatrix) -> Self {
        let n = parent.len();
        let mut adjacency = vec![Vec::new(); n];
        let mut edges = Vec::with_capacity(n.saturating_sub(1));
        for (child, p) in parent.iter().enumerate() {
            if let Some(p) = *p {
                adjacency[p].push(child);
                adjacency[child].push(p);
                edges.push((p, child, costs.get(p, child)));
            }
        }
        for list in &mut adjacency {
            list.sort_unstable();
        }
        Self {
            parent,
            adjacency,
            edges,
        }
    }

    /// Number of nodes spanned.
    pub fn size(&self) -> usize {
        self.parent.len()
    }

    /// Tree edges as `(parent, child, cost)`, ordered by child index.
    pub fn edges(&self) -> &[(usize, usize, u64)] {
        &self.edges
    }

    /// Number of tree edges (`n - 1` for a connected tree).
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Sum of tree edge costs.
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|&(_, _, w)| w).sum()
    }

    /// Tree neighbours of `node` in increasing index order.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Parent of `node` in the tree rooted at 0; `None` for the root.
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parent[node]
    }

    /// Returns `true` if every node is reachable from node 0.
    pub fn is_connected(&self) -> bool {
        let n = self.size();
        if n == 0 {
            return true;
        }
        let mut seen = vec![false; n];
        seen[0] = true;
        let mut stack = vec![0];
        let mut count = 1;
        while let Some(v) = stack.pop() {
            for &w in &self.adjacency[v] {
                if !seen[w] {
                    seen[w] = true;
                    count += 1;
                    stack.push(w);
                }
            }
        }
        count == n
    }
}

/// Builds a minimum spanning tree rooted at node 0.
///
/// The selection scan keeps the first minimum it meets, so ties go to the
/// lowest node index. Zero-cost edges are ordinary edges. Only
/// `cost(v, w)` from the newly added `v` is consulted during relaxation,
/// so asymmetric matrices are read in the tree-growing direction.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::approximate::prim_mst;
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0, 1, 4],
///     vec![1, 0, 2],
///     vec![4, 2, 0],
/// ])
/// .expect("square");
/// let tree = prim_mst(&cm);
/// assert_eq!(tree.num_edges(), 2);
/// assert_eq!(tree.total_weight(), 3);
/// assert_eq!(tree.parent(2), Some(1));
/// ```
pub fn prim_mst(costs: &CostMatrix) -> SpanningTree {
    let n = costs.size();
    let mut key = vec![u64::MAX; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut used = vec![false; n];
    if n == 0 {
        return SpanningTree::from_parents(parent, costs);
    }
    key[0] = 0;

    for _ in 0..n {
        let mut best: Option<usize> = None;
        for v in 0..n {
            if !used[v] && best.map_or(true, |b| key[v] < key[b]) {
                best = Some(v);
            }
        }
        let Some(v) = best else { break };
        used[v] = true;

        for w in 0..n {
            if used[w] {
                continue;
            }
            let c = costs.get(v, w);
            if c < key[w] {
                key[w] = c;
                parent[w] = Some(v);
            }
        }
    }

    SpanningTree::from_parents(parent, costs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> CostMatrix {
        CostMatrix::from_rows(&[
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
        .expect("square")
    }

    #[test]
    fn test_classic_is_star() {
        let tree = prim_mst(&classic());
        assert_eq!(tree.num_edges(), 3);
        assert_eq!(tree.total_weight(), 45);
        assert_eq!(tree.neighbors(0), &[1, 2, 3]);
        assert_eq!(tree.parent(3), Some(0));
        assert_eq!(tree.parent(0), None);
        assert!(tree.is_connected());
    }

    #[test]
    fn test_single_node() {
        let cm = CostMatrix::from_rows(&[vec![0]]).expect("square");
        let tree = prim_mst(&cm);
        assert_eq!(tree.num_edges(), 0);
        assert_eq!(tree.total_weight(), 0);
        assert!(tree.neighbors(0).is_empty());
        assert!(tree.is_connected());
    }

    #[test]
    fn test_two_nodes() {
        let cm = CostMatrix::from_rows(&[vec![0, 5], vec![5, 0]]).expect("square");
        let tree = prim_mst(&cm);
        assert_eq!(tree.edges(), &[(0, 1, 5)]);
    }

    #[test]
    fn test_line_is_chain() {
        // Points 0..4 on a line, cost = |i - j|.
        let mut cm = CostMatrix::new(4);
        for i in 0..4u32 {
            for j in 0..4u32 {
                cm.set(i as usize, j as usize, i.abs_diff(j));
            }
        }
        let tree = prim_mst(&cm);
        assert_eq!(tree.total_weight(), 3);
        assert_eq!(tree.parent(1), Some(0));
        assert_eq!(tree.parent(2), Some(1));
        assert_eq!(tree.parent(3), Some(2));
        assert_eq!(tree.neighbors(1), &[0, 2]);
    }

    #[test]
    fn test_zero_cost_edges_join_tree() {
        // All off-diagonal costs are zero; every node must still be spanned.
        let cm = CostMatrix::new(4);
        let tree = prim_mst(&cm);
        assert_eq!(tree.num_edges(), 3);
        assert_eq!(tree.total_weight(), 0);
        assert!(tree.is_connected());
        // Ties go to the lowest index: everything hangs off node 0.
        assert_eq!(tree.neighbors(0), &[1, 2, 3]);
    }

    #[test]
    fn test_zero_cost_edge_preferred() {
        let cm = CostMatrix::from_rows(&[vec![0, 3, 9], vec![3, 0, 0], vec![9, 0, 0]])
            .expect("square");
        let tree = prim_mst(&cm);
        assert_eq!(tree.parent(2), Some(1));
        assert_eq!(tree.total_weight(), 3);
    }

    #[test]
    fn test_selection_ties_lowest_index() {
        // Nodes 1 and 2 both join at cost 1; 1 is picked first, then 2's
        // key stays 1 via node 0 because cost(1, 2) is not cheaper.
        let cm = CostMatrix::from_rows(&[vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]])
            .expect("square");
        let tree = prim_mst(&cm);
        assert_eq!(tree.parent(1), Some(0));
        assert_eq!(tree.parent(2), Some(0));
    }

    #[test]
    fn test_selection_tie_changes_tree() {
        // 1 and 2 tie at key 1 after the root. Taking 1 first lets it claim
        // 3 at cost 1; taking 2 first would hand 3 to node 2 instead.
        let cm = CostMatrix::from_rows(&[
            vec![0, 1, 1, 5],
            vec![1, 0, 9, 1],
            vec![1, 9, 0, 1],
            vec![5, 1, 1, 0],
        ])
        .expect("square");
        let tree = prim_mst(&cm);
        assert_eq!(tree.parent(1), Some(0));
        assert_eq!(tree.parent(2), Some(0));
        assert_eq!(tree.parent(3), Some(1));
        assert_eq!(tree.neighbors(1), &[0, 3]);
        assert_eq!(tree.total_weight(), 3);
    }
}
