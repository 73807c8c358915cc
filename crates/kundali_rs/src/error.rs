//! Facade errors and their mapping onto API responses.

use serde::Serialize;
use thiserror::Error;

use kundali_bridge::BridgeError;
use kundali_config::ConfigError;
use kundali_ephem::EphemError;
use kundali_vedic::VedicError;

#[derive(Error, Debug)]
pub enum KundaliError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Ephemeris(#[from] EphemError),

    #[error(transparent)]
    Vedic(#[from] VedicError),

    #[error(transparent)]
    Engine(#[from] BridgeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Coarse class of an error as seen by an API caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    Validation,
    Engine,
    Internal,
}

impl ApiErrorKind {
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::Engine | Self::Internal => 500,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Validation => "BAD_REQUEST",
            Self::Engine => "ENGINE_ERROR",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

impl KundaliError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            // Ephemeris and dasha errors only arise from caller-supplied values.
            Self::Validation(_) | Self::Ephemeris(_) | Self::Vedic(_) => ApiErrorKind::Validation,
            Self::Engine(_) => ApiErrorKind::Engine,
            Self::Config(_) | Self::Internal(_) => ApiErrorKind::Internal,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

impl From<serde_json::Error> for KundaliError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            KundaliError::Validation(err.to_string())
        } else {
            KundaliError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_bridge::EngineFailure;

    #[test]
    fn validation_is_400() {
        let e = KundaliError::from(EphemError::InvalidLatitude(91.0));
        assert_eq!(e.kind(), ApiErrorKind::Validation);
        assert_eq!(e.status_code(), 400);
        assert!(e.to_string().contains("91"));
    }

    #[test]
    fn engine_failure_is_500() {
        let e = KundaliError::from(BridgeError::AllEnginesFailed {
            primary_label: "p".into(),
            primary: EngineFailure::Timeout(1),
            fallback_label: "f".into(),
            fallback: EngineFailure::Timeout(2),
        });
        assert_eq!(e.status_code(), 500);
        assert_eq!(e.kind().code(), "ENGINE_ERROR");
    }

    #[test]
    fn malformed_json_is_validation() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(KundaliError::from(err).kind(), ApiErrorKind::Validation);
    }
}
