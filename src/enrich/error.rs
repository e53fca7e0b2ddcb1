use thiserror::Error;

#[derive(Debug, Error)]
/// Why a URL yielded no content. Never escapes the enricher.
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{url} yielded {chars} characters of text (minimum {min})")]
    TooShort { url: String, chars: usize, min: usize },

    #[error("{url} yielded no text")]
    Empty { url: String },
}
