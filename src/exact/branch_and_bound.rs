//! Depth-first branch-and-bound over all tours.
//!
//! # Algorithm
//!
//! Fix node 0 as the start and enumerate permutations of `1..n` depth
//! first, children in increasing index order. A partial path is abandoned
//! as soon as its accumulated cost reaches the best complete tour found so
//! far; costs are non-negative, so no extension of that prefix can improve
//! on the incumbent.
//!
//! # Complexity
//!
//! O((n-1)!) worst case. Callers are expected to keep `n` small.

use tracing::debug;

use crate::distance::CostMatrix;
use crate::models::Tour;

/// Finds an optimal tour by exhaustive branch-and-bound search.
///
/// Ties between equal-cost tours go to the one found first, i.e. the
/// lexicographically smallest node order. A single-node matrix yields the
/// tour `[0, 0]`.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::exact::solve_exact;
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ])
/// .expect("square");
/// let tour = solve_exact(&cm);
/// assert_eq!(tour.cost(), 80);
/// assert_eq!(tour.nodes(), &[0, 1, 3, 2, 0]);
/// ```
pub fn solve_exact(costs: &CostMatrix) -> Tour {
    let mut search = BranchAndBound::new(costs);
    search.descend(0);
    debug!(
        nodes = costs.size(),
        leaves = search.leaves,
        pruned = search.pruned,
        best_cost = search.best_cost,
        "branch-and-bound finished"
    );

    let mut nodes = search.best_path;
    nodes.push(0);
    Tour::new(nodes, search.best_cost)
}

/// Search state for one solve. `best_cost` and `best_path` form the
/// incumbent shared by every branch.
struct BranchAndBound<'a> {
    costs: &'a CostMatrix,
    path: Vec<usize>,
    visited: Vec<bool>,
    best_cost: u64,
    best_path: Vec<usize>,
    leaves: u64,
    pruned: u64,
}

impl<'a> BranchAndBound<'a> {
    fn new(costs: &'a CostMatrix) -> Self {
        let n = costs.size();
        let mut path = Vec::with_capacity(n);
        path.push(0);
        let mut visited = vec![false; n];
        visited[0] = true;
        Self {
            costs,
            path,
            visited,
            best_cost: u64::MAX,
            best_path: Vec::new(),
            leaves: 0,
            pruned: 0,
        }
    }

    fn descend(&mut self, cost: u64) {
        if cost >= self.best_cost {
            self.pruned += 1;
            return;
        }

        let n = self.costs.size();
        let last = self.path[self.path.len() - 1];
        if self.path.len() == n {
            self.leaves += 1;
            let total = cost + self.costs.get(last, 0);
            if total < self.best_cost {
                self.best_cost = total;
                self.best_path.clone_from(&self.path);
            }
            return;
        }

        for v in 1..n {
            if self.visited[v] {
                continue;
            }
            self.visited[v] = true;
            self.path.push(v);
            self.descend(cost + self.costs.get(last, v));
            self.path.pop();
            self.visited[v] = false;
        }
    }
}
