use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
/// Failure of one judgment call. Fatal to the whole evaluation pass.
pub enum JudgeError {
    #[error("judge provider request failed: {reason}")]
    Provider { reason: String },

    #[error("judge call timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("judge output contains no JSON")]
    NoJson,

    #[error("judge output JSON is not an array")]
    NotArray,

    #[error("judge output is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("judge row '{id}' has invalid {field}: {value}")]
    InvalidField {
        id: String,
        field: &'static str,
        value: String,
    },
}

pub type JudgeResult<T> = Result<T, JudgeError>;
