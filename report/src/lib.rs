//! Banns Report
//!
//! Plain-text rendering of verdicts and family tree listings.

mod format;

pub use format::{children_listing, name_listing, reason_line, verdict_line};
