//! Closed tour type.

use serde::Serialize;

use crate::distance::CostMatrix;

/// A closed tour: node sequence starting and ending at node 0, with its cost.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::models::Tour;
///
/// let cm = CostMatrix::from_rows(&[vec![0, 5], vec![5, 0]]).expect("square");
/// let tour = Tour::from_nodes(vec![0, 1, 0], &cm);
/// assert_eq!(tour.cost(), 10);
/// assert!(tour.is_valid_for(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    nodes: Vec<usize>,
    cost: u64,
}

impl Tour {
    /// Creates a tour with a precomputed cost.
    pub fn new(nodes: Vec<usize>, cost: u64) -> Self {
        Self { nodes, cost }
    }

    /// Creates a tour, summing its cost from the matrix.
    pub fn from_nodes(nodes: Vec<usize>, costs: &CostMatrix) -> Self {
        let cost = costs.tour_cost(&nodes);
        Self { nodes, cost }
    }

    /// Node sequence, closing node included.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Total cost of the closed tour.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Number of nodes in the sequence (`n + 1` for a valid tour).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if this is a closed tour over `n` nodes: length
    /// `n + 1`, starts and ends at 0, and visits every other node once.
    pub fn is_valid_for(&self, n: usize) -> bool {
        if n == 0 || self.nodes.len() != n + 1 {
            return false;
        }
        if self.nodes[0] != 0 || self.nodes[n] != 0 {
            return false;
        }
        let mut seen = vec![false; n];
        seen[0] = true;
        for &v in &self.nodes[1..n] {
            if v >= n || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }
}
