//! Error types for civil time parsing and conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or converting civil date/time values.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Time string is not a valid `HH:MM` or `HH:MM:SS` clock time.
    InvalidTime(String),
    /// UTC offset outside [-14, +14] hours.
    InvalidUtcOffset(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date '{s}', expected YYYY-MM-DD"),
            Self::InvalidTime(s) => write!(f, "invalid time '{s}', expected HH:MM or HH:MM:SS"),
            Self::InvalidUtcOffset(h) => write!(f, "UTC offset {h}h outside [-14, 14]"),
        }
    }
}

impl Error for TimeError {}
