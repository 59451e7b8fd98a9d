//! Joke retrieval and search orchestration over a [`JokeSource`].

use super::result::ServiceResult;
use super::search::build_search_result;
use super::JokeProvider;
use crate::models::JokeSearchResult;
use joke_api::{JokeApiError, JokeSource};
use std::fmt;

/// Message returned when a search term is empty or whitespace.
pub const EMPTY_SEARCH_TERM_MESSAGE: &str = "Search term must contain value";

/// Why a service call failed. Used for logging only; callers see a generic failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The caller supplied invalid input. No upstream call was made.
    ValidationError,
    /// The upstream API was unreachable or answered with a non-success status.
    UpstreamUnavailable,
    /// The upstream body was missing, malformed or lacked a required field.
    MalformedResponse,
    /// The upstream body parsed but the joke text was blank.
    EmptyPayload,
}

impl FailureKind {
    /// Classify an upstream client error.
    pub fn from_api_error(err: &JokeApiError) -> Self {
        match err {
            JokeApiError::Parse(_) => Self::MalformedResponse,
            JokeApiError::Http(_) | JokeApiError::Status { .. } | JokeApiError::Config(_) => {
                Self::UpstreamUnavailable
            }
        }
    }

    /// Stable name used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "validation_error",
            Self::UpstreamUnavailable => "upstream_unavailable",
            Self::MalformedResponse => "malformed_response",
            Self::EmptyPayload => "empty_payload",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Business layer over the upstream joke API.
///
/// Stateless apart from its injected source; one instance serves all requests.
#[derive(Debug, Clone)]
pub struct JokeService<S> {
    source: S,
}

impl<S: JokeSource> JokeService<S> {
    /// Create a service that fetches jokes from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying joke source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch one random joke.
    ///
    /// Fails without a message if the upstream call fails or the joke is blank.
    pub async fn get_random_joke(&self) -> ServiceResult<String> {
        let response = match self.source.fetch_random_joke().await {
            Ok(response) => response,
            Err(err) => {
                log_upstream_failure("random", &err);
                return ServiceResult::fail();
            }
        };

        if response.joke.trim().is_empty() {
            tracing::error!(
                operation = "random",
                kind = %FailureKind::EmptyPayload,
                joke_id = response.id.as_deref().unwrap_or("<none>"),
                "joke API returned an empty joke"
            );
            return ServiceResult::fail();
        }

        ServiceResult::ok(response.joke)
    }

    /// Search jokes containing `term`, highlighted and bucketed by length.
    ///
    /// A blank `term` fails with [`EMPTY_SEARCH_TERM_MESSAGE`] before any
    /// network call. Upstream failures fail without a message.
    pub async fn search_jokes(&self, term: &str) -> ServiceResult<JokeSearchResult> {
        if term.trim().is_empty() {
            tracing::debug!(kind = %FailureKind::ValidationError, "rejected blank search term");
            return ServiceResult::fail_with(EMPTY_SEARCH_TERM_MESSAGE);
        }

        let response = match self.source.fetch_search(term).await {
            Ok(response) => response,
            Err(err) => {
                log_upstream_failure("search", &err);
                return ServiceResult::fail();
            }
        };

        let count = response.results.len();
        match build_search_result(term, response.results) {
            Ok(result) => {
                tracing::debug!(
                    count,
                    short = result.short_jokes.len(),
                    medium = result.medium_jokes.len(),
                    long = result.long_jokes.len(),
                    "search results bucketed"
                );
                ServiceResult::ok(result)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to compile search highlighter");
                ServiceResult::fail()
            }
        }
    }
}

impl<S: JokeSource> JokeProvider for JokeService<S> {
    async fn get_random_joke(&self) -> ServiceResult<String> {
        JokeService::get_random_joke(self).await
    }

    async fn search_jokes(&self, term: &str) -> ServiceResult<JokeSearchResult> {
        JokeService::search_jokes(self, term).await
    }
}

/// Log an upstream failure with its kind and status or parse context.
fn log_upstream_failure(operation: &'static str, err: &JokeApiError) {
    let kind = FailureKind::from_api_error(err);
    match err.status() {
        Some(status) => tracing::error!(operation, %kind, status, "joke API responded with error status"),
        None => tracing::error!(operation, %kind, error = %err, "joke API call failed"),
    }
}
