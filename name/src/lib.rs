//! Banns Name Resolution
//!
//! Candidate name parsing and the single full-name resolver (a woman's
//! effective last name: spouse's, else father's, else "Doe").

mod full_name;
mod resolve;

pub use full_name::{FullName, NameError};
pub use resolve::{effective_last_name, full_name, full_name_of, FALLBACK_LAST_NAME};
