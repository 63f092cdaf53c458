//! Banns Family Tree Storage
//!
//! The immutable family tree and its builder. The tree is built once,
//! sealed, and read-only from then on; every lookup is guarded so sparse
//! trees (missing fathers, unmarried people) never panic.

mod builder;
mod tree;

pub mod sample;

pub use builder::{BuildError, BuildResult, PersonBuilder, TreeBuilder};
pub use tree::FamilyTree;
