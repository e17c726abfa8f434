//! Domain model types.
//!
//! A [`Tour`] is the output of every solver: a closed node sequence from
//! the origin (node 0) back to itself, together with its total cost.

mod tour;

pub use tour::Tour;
