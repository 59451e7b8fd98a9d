//! Upstream joke API client and the trait it is consumed through.
//!
//! [`JokeSource`] is the seam between the business layer and the network.
//! [`JokeClient`] is the production implementation backed by `reqwest`.

use crate::config::JokeApiConfig;
use crate::error::JokeApiError;
use crate::http;
use crate::types::{RandomJokeResponse, SearchResponse};
use serde::de::DeserializeOwned;

/// A source of dad jokes.
///
/// Implementors perform exactly one upstream call per method invocation and
/// report transport, status and body-shape failures as [`JokeApiError`].
/// They never retry and never interpret the payload beyond deserialization.
///
/// All implementations must be `Send + Sync` so one instance can serve
/// concurrent requests.
pub trait JokeSource: Send + Sync {
    /// Fetch a single random joke.
    ///
    /// # Errors
    ///
    /// Returns [`JokeApiError::Status`] for a non-success status,
    /// [`JokeApiError::Http`] if the request fails in transit, or
    /// [`JokeApiError::Parse`] if the body is not a [`RandomJokeResponse`].
    fn fetch_random_joke(
        &self,
    ) -> impl std::future::Future<Output = Result<RandomJokeResponse, JokeApiError>> + Send;

    /// Search jokes containing `term`.
    ///
    /// # Errors
    ///
    /// Same as [`JokeSource::fetch_random_joke`], for a [`SearchResponse`] body.
    fn fetch_search(
        &self,
        term: &str,
    ) -> impl std::future::Future<Output = Result<SearchResponse, JokeApiError>> + Send;
}

/// HTTP client for the icanhazdadjoke API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct JokeClient {
    config: JokeApiConfig,
    client: reqwest::Client,
}

impl JokeClient {
    /// Create a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`JokeApiError::Config`] if `config` fails validation, or
    /// [`JokeApiError::Http`] if the underlying client cannot be built.
    pub fn new(config: JokeApiConfig) -> Result<Self, JokeApiError> {
        config.validate()?;
        let client = http::build_client(&config)?;
        Ok(Self { config, client })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &JokeApiConfig {
        &self.config
    }

    /// URL of the random joke endpoint.
    pub fn random_url(&self) -> String {
        format!("{}/", self.config.trimmed_base_url())
    }

    /// URL of the search endpoint for `term`, with the term percent-encoded.
    pub fn search_url(&self, term: &str) -> String {
        format!(
            "{}/search?limit={}&term={}",
            self.config.trimmed_base_url(),
            self.config.search_limit,
            urlencoding::encode(term)
        )
    }

    /// Issue a GET and decode the JSON body into `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, JokeApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                JokeApiError::Http(format!("joke API request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(JokeApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| {
                JokeApiError::Http(format!(
                    "joke API response read failed: {}",
                    e.without_url()
                ))
            })?;

        tracing::trace!(bytes = body.len(), "joke API response received");

        decode_body(&body)
    }
}

/// Decode a response body, treating an empty body as malformed.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, JokeApiError> {
    if body.trim().is_empty() {
        return Err(JokeApiError::Parse("empty response body".into()));
    }
    serde_json::from_str(body).map_err(|e| JokeApiError::Parse(e.to_string()))
}

impl JokeSource for JokeClient {
    async fn fetch_random_joke(&self) -> Result<RandomJokeResponse, JokeApiError> {
        tracing::debug!("fetching random joke");
        self.get_json(&self.random_url()).await
    }

    async fn fetch_search(&self, term: &str) -> Result<SearchResponse, JokeApiError> {
        tracing::trace!(term, "searching jokes");
        self.get_json(&self.search_url(term)).await
    }
}
