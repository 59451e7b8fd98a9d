//! Dad jokes: an HTTP facade over the icanhazdadjoke API.
//!
//! # Architecture
//!
//! - **Upstream client** (`joke-api` crate): typed GET calls with
//!   `Accept: application/json` and a configured `User-Agent`
//! - **Service** ([`service`]): input validation, failure mapping into
//!   [`ServiceResult`], and search transformation (highlighting + length buckets)
//! - **HTTP API** ([`server`]): axum routes returning plain text, JSON,
//!   or problem documents
//!
//! Every request is independent. No caching, persistence, or retries.

pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod service;

pub use config::{AppConfig, ServerConfig};
pub use error::{AppError, Result};
pub use models::{JokeSearchItem, JokeSearchResult};
pub use server::{JokeServer, build_router};
pub use service::{JokeProvider, JokeService, ServiceResult};
