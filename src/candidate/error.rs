use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Reasons a string is not a well-formed candidate id.
pub enum CandidateIdError {
    #[error("candidate id '{id}' must have the form section:group:title")]
    Malformed { id: String },

    #[error("unknown section '{section}' in candidate id")]
    UnknownSection { section: String },

    #[error("invalid index '{value}' in candidate id '{id}'")]
    InvalidIndex { id: String, value: String },
}
