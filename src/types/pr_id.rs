// ABOUTME: Pull request identifier validation.
// ABOUTME: Ensures PR ids are non-empty decimal numbers safe to use in paths and API URLs.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrIdError {
    #[error("pull request id cannot be empty")]
    Empty,

    #[error("pull request id must be numeric, found '{0}'")]
    NotNumeric(String),
}

/// A pull request number, kept as the decimal text it arrived as.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrId(String);

impl PrId {
    pub fn new(value: &str) -> Result<Self, PrIdError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(PrIdError::Empty);
        }

        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(PrIdError::NotNumeric(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
