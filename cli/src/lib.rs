//! Banns CLI library.
//!
//! Holds the application state behind the `banns` binary so the query
//! flow stays testable without a terminal.

mod app;

pub use app::App;
