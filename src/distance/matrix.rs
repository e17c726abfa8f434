//! Dense integer cost matrix.

/// A dense n×n matrix of non-negative edge costs stored in row-major order.
///
/// Node 0 is the origin of every tour. Costs need not be symmetric; the
/// solvers read `get(from, to)` for every ordered pair they traverse.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0, 10, 15],
///     vec![10, 0, 35],
///     vec![15, 35, 0],
/// ])
/// .expect("square");
/// assert_eq!(cm.size(), 3);
/// assert_eq!(cm.get(1, 2), 35);
/// assert_eq!(cm.tour_cost(&[0, 1, 2, 0]), 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    data: Vec<u32>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Creates a cost matrix from a row-major buffer.
    ///
    /// Returns `None` if `size` is zero or the data length doesn't match
    /// `size * size`.
    pub fn from_data(size: usize, data: Vec<u32>) -> Option<Self> {
        if size == 0 || data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a cost matrix from explicit rows.
    ///
    /// Returns `None` if there are no rows or any row length differs from
    /// the number of rows.
    pub fn from_rows(rows: &[Vec<u32>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Self::from_data(size, rows.concat())
    }

    /// Returns the cost of travelling from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        assert!(from < self.size && to < self.size, "node index out of range");
        u64::from(self.data[from * self.size + to])
    }

    /// Sets the cost of travelling from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, from: usize, to: usize, cost: u32) {
        assert!(from < self.size && to < self.size, "node index out of range");
        self.data[from * self.size + to] = cost;
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `from` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds.
    pub fn row(&self, from: usize) -> &[u32] {
        assert!(from < self.size, "node index out of range");
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns `true` if `cost(i, j) == cost(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if `cost(a, c) <= cost(a, b) + cost(b, c)` for all
    /// nodes `a`, `b`, `c`.
    ///
    /// O(n³). The MST heuristic's factor-two bound only holds when this is
    /// true.
    pub fn satisfies_triangle_inequality(&self) -> bool {
        let n = self.size;
        for a in 0..n {
            for b in 0..n {
                for c in 0..n {
                    if self.get(a, c) > self.get(a, b) + self.get(b, c) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Sums the edge costs along consecutive nodes of `path`.
    ///
    /// The path is taken as given; pass a closed tour (ending at its start)
    /// to get the cycle cost.
    pub fn tour_cost(&self, path: &[usize]) -> u64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}
