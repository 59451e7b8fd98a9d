//! Error types for application startup and configuration.
//!
//! Request handling never surfaces these: per-request outcomes are
//! [`crate::service::ServiceResult`] values.

/// Top-level error type for the dad jokes service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Upstream client could not be constructed.
    #[error("client error: {0}")]
    Client(#[from] joke_api::JokeApiError),

    /// HTTP server bind or serve failure.
    #[error("server error: {0}")]
    Server(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
