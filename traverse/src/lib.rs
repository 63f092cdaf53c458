//! Banns Traversal
//!
//! Depth-first, pre-order walk over a family tree with short-circuit
//! verdict propagation.

mod walk;

pub use walk::{for_each_reachable, walk};
