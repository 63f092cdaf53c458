//! Banns Core Types
//!
//! This crate provides the foundational types used throughout banns:
//! - Identity type (PersonId)
//! - Person records (the Man/Woman variant payload)
//! - Query outcomes (Verdict, Impediment)

mod id;
mod person;
mod verdict;

pub use id::*;
pub use person::*;
pub use verdict::*;
