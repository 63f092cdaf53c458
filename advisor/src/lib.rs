//! Banns Advisor
//!
//! Decide whether two named candidates may marry.
//!
//! Responsibilities:
//! - Locate a candidate by resolved full name during the walk
//! - Screen the other candidate against the matched person's relatives
//! - Map the first violated category to an impediment
//! - Fall back to an explicit non-answer when neither name is found

mod advisor;
pub mod kin;

pub use advisor::MarriageAdvisor;
