//! Banns Tests
//!
//! Shared fixtures for the workspace integration tests, chiefly a seeded
//! random family tree generator for exercising the advisor against
//! arbitrary well-formed trees.

pub mod gen;

pub use gen::{grow, Grown, GrowthPlan};
