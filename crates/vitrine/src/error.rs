//! Error types for vitrine operations

use thiserror::Error;

/// Result type for vitrine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the showcase core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Network-level failure (connect, send, or body read)
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status from the generation service
    #[error("service responded with HTTP {0}")]
    ResponseStatus(u16),

    /// A well-formed response was missing an expected field
    #[error("response is missing expected field: {0}")]
    MissingPayload(String),

    /// Sample byte stream that cannot be split into whole 16-bit samples
    #[error("PCM byte stream has odd length: {0} bytes")]
    MalformedSampleData(usize),

    /// Response body that could not be decoded
    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    /// Missing or invalid client configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Audio output failure (device open or container decode)
    #[error("playback error: {0}")]
    Playback(String),
}

impl Error {
    /// Check if this error is retryable.
    ///
    /// Transport failures and non-success statuses retry; every status code
    /// is treated the same, rate limits and permanent rejections alike.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::ResponseStatus(_))
    }
}
