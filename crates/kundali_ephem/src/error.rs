//! Error types for the ephemeris calculator.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundali_time::TimeError;
use kundali_vedic::VedicError;

/// Errors from building a birth input or computing positions.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Malformed date, time or UTC offset.
    Time(TimeError),
    /// Error from a Vedic base calculation.
    Vedic(VedicError),
    /// Latitude outside [-90, 90] or not finite.
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180] or not finite.
    InvalidLongitude(f64),
    /// Any other input the calculator cannot accept.
    InvalidInput(String),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::Vedic(e) => write!(f, "{e}"),
            Self::InvalidLatitude(v) => write!(f, "latitude {v} outside [-90, 90]"),
            Self::InvalidLongitude(v) => write!(f, "longitude {v} outside [-180, 180]"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for EphemError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Vedic(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for EphemError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<VedicError> for EphemError {
    fn from(e: VedicError) -> Self {
        Self::Vedic(e)
    }
}
