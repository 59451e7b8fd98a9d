//! Shared HTTP client construction for upstream requests.
//!
//! Provides a configured [`reqwest::Client`] whose default headers satisfy
//! the upstream API: JSON responses and an identifying `User-Agent`.

use crate::config::JokeApiConfig;
use crate::error::JokeApiError;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::Duration;

/// Media type requested from the upstream API.
pub const ACCEPT_JSON: &str = "application/json";

/// Build a [`reqwest::Client`] configured for the upstream joke API.
///
/// The client has:
/// - `Accept: application/json` on every request
/// - The configured `User-Agent`
/// - A request timeout only if `config.timeout_seconds` is set
///
/// # Errors
///
/// Returns [`JokeApiError::Config`] if the `User-Agent` is not a valid header
/// value, or [`JokeApiError::Http`] if the client cannot be constructed.
pub fn build_client(config: &JokeApiConfig) -> Result<reqwest::Client, JokeApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));

    let user_agent = HeaderValue::from_str(&config.user_agent)
        .map_err(|e| JokeApiError::Config(format!("invalid user_agent: {e}")))?;

    let mut builder = reqwest::Client::builder()
        .default_headers(headers)
        .user_agent(user_agent);

    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder
        .build()
        .map_err(|e| JokeApiError::Http(format!("failed to build HTTP client: {e}")))
}
