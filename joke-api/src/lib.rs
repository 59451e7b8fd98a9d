//! # joke-api
//!
//! Typed client for the [icanhazdadjoke](https://icanhazdadjoke.com) HTTP API.
//!
//! ## Design
//!
//! - One `reqwest::Client` per [`JokeClient`], built once from [`JokeApiConfig`]
//! - Every request sends `Accept: application/json` and the configured `User-Agent`
//! - Failures are typed: transport, non-success status, and malformed body are
//!   distinct [`JokeApiError`] variants so callers can log them apart
//! - No retries and no caching; one remote call per method invocation
//!
//! Consumers depend on the [`JokeSource`] trait rather than the concrete client.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use client::{JokeClient, JokeSource};
pub use config::JokeApiConfig;
pub use error::{JokeApiError, Result};
pub use types::{RandomJokeResponse, SearchResponse, SearchResultItem};
