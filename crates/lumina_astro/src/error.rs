//! Error types for chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use lumina_core::ProviderError;
use lumina_time::TimeError;

/// Errors from chart, transit, phase, and retrograde calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AstroError {
    /// Invalid geographic location parameter. Raised before any
    /// ephemeris query; no partial result is produced.
    InvalidLocation(&'static str),
    /// Error from calendar parsing or validation.
    Time(TimeError),
    /// The ephemeris source failed; propagated unmodified, no retry.
    Ephemeris(ProviderError),
}

impl Display for AstroError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
        }
    }
}

impl Error for AstroError {}

impl From<TimeError> for AstroError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<ProviderError> for AstroError {
    fn from(e: ProviderError) -> Self {
        Self::Ephemeris(e)
    }
}
