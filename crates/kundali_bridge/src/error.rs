//! Bridge error types.

use thiserror::Error;

/// Why a single engine attempt failed.
#[derive(Error, Debug)]
pub enum EngineFailure {
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error talking to engine: {0}")]
    Io(#[from] std::io::Error),

    #[error("timed out after {0} ms")]
    Timeout(u64),

    #[error("exited with {}: {}", describe_code(.code), .stderr)]
    Exit { code: Option<i32>, stderr: String },

    #[error("unparsable engine output: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("engine reported failure: {0}")]
    Reported(String),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("code {c}"),
        None => "signal".to_string(),
    }
}

/// Why the bridge could not produce a chart.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error(
        "all chart engines failed: {primary_label}: {primary}; {fallback_label}: {fallback}"
    )]
    AllEnginesFailed {
        primary_label: String,
        primary: EngineFailure,
        fallback_label: String,
        fallback: EngineFailure,
    },

    #[error("failed to encode birth input: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type BridgeResult<T> = Result<T, BridgeError>;
