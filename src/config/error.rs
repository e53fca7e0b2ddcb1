//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A boolean variable held something other than a recognised flag value.
    #[error("invalid boolean for {name}: '{value}' (expected true/false, 1/0, yes/no, on/off)")]
    InvalidBool { name: &'static str, value: String },

    /// A numeric variable could not be parsed.
    #[error("failed to parse {name} '{value}': {source}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// `min_score` is outside the judge's 0-100 scale.
    #[error("invalid min_score {value}: must be between 0 and 100")]
    InvalidMinScore { value: u32 },

    /// The judge model identifier is blank.
    #[error("judge model identifier must not be empty")]
    EmptyModel,

    /// Reasoning effort is not one of the supported levels.
    #[error("unknown reasoning effort '{value}' (expected low, medium or high)")]
    InvalidReasoningEffort { value: String },

    /// The brief prompt file path exists but is not a file.
    #[error("brief prompt path is not a file: {path}")]
    NotAFile { path: PathBuf },
}
