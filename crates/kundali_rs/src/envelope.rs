//! JSON response envelopes: `{success: true, ...payload}` or
//! `{success: false, error, code}`.

use serde::Serialize;

use crate::error::{ApiErrorKind, KundaliError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
    pub kind: ApiErrorKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: Option<T>,
    #[serde(flatten)]
    pub failure: Option<ErrorBody>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            failure: None,
        }
    }

    pub fn err(error: &KundaliError) -> Self {
        let kind = error.kind();
        Self {
            success: false,
            data: None,
            failure: Some(ErrorBody {
                error: error.to_string(),
                code: kind.code(),
                kind,
            }),
        }
    }

    pub fn from_result(result: Result<T, KundaliError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(&e),
        }
    }

    /// HTTP-style status for this envelope.
    pub fn status_code(&self) -> u16 {
        self.failure.as_ref().map_or(200, |f| f.kind.status_code())
    }

    pub fn to_json(&self) -> Result<String, KundaliError> {
        serde_json::to_string_pretty(self).map_err(|e| KundaliError::Internal(e.to_string()))
    }
}
