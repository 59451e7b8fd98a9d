//! Upstream client configuration with sensible defaults.
//!
//! [`JokeApiConfig`] controls where requests go, how they identify
//! themselves, and how many search results are requested.

use crate::error::JokeApiError;
use serde::{Deserialize, Serialize};

/// Default upstream base address.
pub const DEFAULT_BASE_URL: &str = "https://icanhazdadjoke.com";

/// Default `User-Agent`. The upstream API asks clients to identify themselves.
pub const DEFAULT_USER_AGENT: &str = "DadJokesApp (https://github.com/rwu864/degreed_take_home)";

/// Number of results requested from the search endpoint.
pub const DEFAULT_SEARCH_LIMIT: u32 = 30;

/// Configuration for the upstream joke API client.
///
/// Use [`Default::default()`] for the public API, or override fields
/// (typically `base_url` in tests).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JokeApiConfig {
    /// Base address of the upstream API, without the endpoint path.
    pub base_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// `limit` query parameter for searches.
    pub search_limit: u32,
    /// Per-request timeout in seconds. `None` leaves it to the transport.
    pub timeout_seconds: Option<u64>,
}

impl Default for JokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            timeout_seconds: None,
        }
    }
}

impl JokeApiConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` must be an absolute `http` or `https` URL
    /// - `user_agent` must not be blank
    /// - `search_limit` must be greater than 0
    /// - `timeout_seconds`, when set, must be greater than 0
    pub fn validate(&self) -> Result<(), JokeApiError> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| JokeApiError::Config(format!("invalid base_url: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(JokeApiError::Config(
                "base_url must use http or https".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(JokeApiError::Config(
                "user_agent must not be empty".into(),
            ));
        }
        if self.search_limit == 0 {
            return Err(JokeApiError::Config(
                "search_limit must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == Some(0) {
            return Err(JokeApiError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Base address with any trailing slash removed, ready for path joining.
    pub(crate) fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
