//! Candidate name parsing.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors for candidate name input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Candidate name is empty")]
    Empty,

    #[error("Candidate name needs a first and a last part: {0:?}")]
    MissingLastName(String),
}

/// A candidate name in `"First Last"` form.
///
/// Parsing trims the input and collapses interior whitespace to single
/// spaces, so `"  Mary   Smith "` compares equal to a resolved `"Mary
/// Smith"`. At least two parts are required; resolved names always have
/// two, so a single token could never match anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName(String);

impl FullName {
    /// Parse and normalize a candidate name.
    pub fn parse(input: &str) -> Result<Self, NameError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(NameError::MissingLastName(trimmed.to_string()));
        }
        Ok(Self(parts.join(" ")))
    }

    /// The normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FullName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
