//! Joke service: input validation, upstream orchestration, search transformation.
//!
//! [`JokeService`] is the production [`JokeProvider`]. The HTTP layer depends
//! only on the trait so it can be exercised without an upstream.

pub mod jokes;
pub mod result;
pub mod search;

pub use jokes::{EMPTY_SEARCH_TERM_MESSAGE, FailureKind, JokeService};
pub use result::ServiceResult;
pub use search::{Highlighter, JokeLength};

use crate::models::JokeSearchResult;

/// The operations the HTTP layer needs from the business layer.
///
/// Every path returns a [`ServiceResult`]; implementations never panic or
/// propagate errors past this boundary.
pub trait JokeProvider: Send + Sync {
    /// Fetch one random joke.
    fn get_random_joke(&self) -> impl std::future::Future<Output = ServiceResult<String>> + Send;

    /// Search jokes containing `term`, highlighted and bucketed by length.
    fn search_jokes(
        &self,
        term: &str,
    ) -> impl std::future::Future<Output = ServiceResult<JokeSearchResult>> + Send;
}
