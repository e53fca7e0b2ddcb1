use thiserror::Error;

use crate::judge::JudgeError;

#[derive(Debug, Error)]
/// Reasons a run falls back to passing everything through.
pub enum GateError {
    #[error("missing AI_API_KEY, quality gate skipped")]
    MissingCredential,

    #[error(transparent)]
    Judge(#[from] JudgeError),
}
