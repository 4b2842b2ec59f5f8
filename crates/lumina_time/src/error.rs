//! Error types for time conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar parsing and validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Input string is not a valid ISO-8601 UTC date-time.
    Parse(String),
    /// Calendar fields are out of range (month 13, hour 25, ...).
    InvalidDate(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
        }
    }
}

impl Error for TimeError {}
