//! Error types for the joke-api crate.
//!
//! Messages carry the HTTP status or parse context so callers can log the
//! cause. They never include request headers.

/// Errors that can occur while talking to the upstream joke API.
#[derive(Debug, thiserror::Error)]
pub enum JokeApiError {
    /// The request could not be sent or the response body could not be read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The upstream API answered with a non-success status code.
    #[error("upstream responded with status {status}")]
    Status {
        /// The HTTP status code returned by the upstream API.
        status: u16,
    },

    /// The response body was missing, malformed, or lacked a required field.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl JokeApiError {
    /// Returns the upstream status code, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the body arrived but could not be deserialized.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Convenience type alias for joke-api results.
pub type Result<T> = std::result::Result<T, JokeApiError>;
