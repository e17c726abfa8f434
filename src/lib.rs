//! # u-tsp
//!
//! Traveling salesman tours over an integer cost matrix, with node 0 as the
//! fixed origin.
//!
//! ## Modules
//!
//! - [`distance`] — Dense cost matrix and its text loader
//! - [`models`] — Closed [`Tour`](models::Tour) type
//! - [`exact`] — Branch-and-bound search for the optimal tour
//! - [`approximate`] — MST double-tree heuristic (Prim + preorder walk)
//! - [`report`] — Timing and text/JSON reporting of solver runs
//! - [`error`] — Input error taxonomy
//!
//! ## Example
//!
//! ```
//! use u_tsp::distance::parse_matrix;
//! use u_tsp::{approximate::solve_approx, exact::solve_exact};
//!
//! let cm = parse_matrix("0 10 15 20\n10 0 35 25\n15 35 0 30\n20 25 30 0\n")
//!     .expect("valid matrix");
//! let optimal = solve_exact(&cm);
//! let approx = solve_approx(&cm);
//! assert_eq!(optimal.cost(), 80);
//! assert!(approx.cost() >= optimal.cost());
//! ```

pub mod approximate;
pub mod distance;
pub mod error;
pub mod exact;
pub mod models;
pub mod report;

pub use error::{Result, TspError};
