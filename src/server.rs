//! Inbound HTTP API over a [`JokeProvider`].
//!
//! ## Endpoints
//!
//! - `GET /api/jokes/random` — a random joke as plain text
//! - `GET /api/jokes/search?term=...` — highlighted jokes bucketed by length
//! - `GET /health` — liveness probe
//!
//! Failures are returned as RFC 7807 problem documents.

use crate::config::ServerConfig;
use crate::service::{JokeProvider, ServiceResult};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Title of the problem returned when the upstream API fails.
pub const JOKE_API_ERROR_TITLE: &str = "Joke API Error";

/// Detail of the problem returned when the upstream API fails.
pub const JOKE_API_ERROR_DETAIL: &str = "Unable to fetch a joke at this time.";

/// Title of the problem returned for a blank search term.
pub const INVALID_SEARCH_TITLE: &str = "Invalid search parameter";

/// Detail of the problem returned for a blank search term.
pub const INVALID_SEARCH_DETAIL: &str = "Search term cannot be empty or whitespace";

const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// RFC 7807 problem document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// Short, human-readable summary of the problem type.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Explanation specific to this occurrence.
    pub detail: String,
    /// Request path that produced the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDetails {
    fn new(status: StatusCode, title: &str, detail: &str, uri: &Uri) -> Self {
        Self {
            title: title.to_owned(),
            status: status.as_u16(),
            detail: detail.to_owned(),
            instance: Some(uri.path().to_owned()),
        }
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, PROBLEM_CONTENT_TYPE)], Json(self)).into_response()
    }
}

/// Query string of the search endpoint.
#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    term: Option<String>,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the API router backed by `provider`.
pub fn build_router<P: JokeProvider + 'static>(provider: Arc<P>) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/jokes/random", get(handle_random_joke::<P>))
        .route("/api/jokes/search", get(handle_search_jokes::<P>))
        .with_state(provider)
}

/// `GET /health`.
async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}

/// `GET /api/jokes/random`.
async fn handle_random_joke<P: JokeProvider>(
    State(provider): State<Arc<P>>,
    uri: Uri,
) -> Response {
    match provider.get_random_joke().await {
        ServiceResult::Ok(joke) => (StatusCode::OK, joke).into_response(),
        ServiceResult::Fail(_) => joke_api_error(&uri),
    }
}

/// `GET /api/jokes/search?term=...`.
async fn handle_search_jokes<P: JokeProvider>(
    State(provider): State<Arc<P>>,
    params: Result<Query<SearchParams>, QueryRejection>,
    uri: Uri,
) -> Response {
    let term = match params {
        Ok(Query(params)) => params.term.unwrap_or_default(),
        Err(rejection) => {
            tracing::debug!("rejected search query: {rejection}");
            return invalid_search(&uri);
        }
    };
    if term.trim().is_empty() {
        return invalid_search(&uri);
    }

    match provider.search_jokes(&term).await {
        ServiceResult::Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        ServiceResult::Fail(_) => joke_api_error(&uri),
    }
}

fn invalid_search(uri: &Uri) -> Response {
    ProblemDetails::new(
        StatusCode::BAD_REQUEST,
        INVALID_SEARCH_TITLE,
        INVALID_SEARCH_DETAIL,
        uri,
    )
    .into_response()
}

fn joke_api_error(uri: &Uri) -> Response {
    ProblemDetails::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        JOKE_API_ERROR_TITLE,
        JOKE_API_ERROR_DETAIL,
        uri,
    )
    .into_response()
}

// ---------------------------------------------------------------------------
// JokeServer
// ---------------------------------------------------------------------------

/// Running HTTP server.
///
/// Serves in a background tokio task until [`JokeServer::shutdown`] is called,
/// the cancellation token passed to [`JokeServer::start`] is cancelled, or the
/// server is dropped. In-flight requests finish before the task exits.
pub struct JokeServer {
    addr: SocketAddr,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl JokeServer {
    /// Start the HTTP server.
    ///
    /// Binds to `{config.host}:{config.port}` (use port `0` for auto-assign)
    /// and begins serving in a background tokio task.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind.
    pub async fn start<P: JokeProvider + 'static>(
        provider: Arc<P>,
        config: &ServerConfig,
        cancel: CancellationToken,
    ) -> crate::error::Result<Self> {
        let app = build_router(provider);

        let bind_addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&bind_addr).await.map_err(|e| {
            crate::error::AppError::Server(format!("bind to {bind_addr} failed: {e}"))
        })?;

        let addr = listener.local_addr().map_err(|e| {
            crate::error::AppError::Server(format!("failed to get local addr: {e}"))
        })?;

        info!("joke API listening on http://{addr}");

        let shutdown = cancel.clone();
        let handle = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown.cancelled_owned())
                .await;
            if let Err(e) = result {
                tracing::error!("joke API server error: {e}");
            }
            info!("joke API server stopped");
        });

        Ok(Self {
            addr,
            cancel,
            handle: Some(handle),
        })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Begin graceful shutdown.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Wait for the server task to exit. Returns immediately once it has
    /// already been awaited.
    pub async fn wait(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        if let Err(e) = handle.await {
            tracing::error!("joke API server task failed: {e}");
        }
    }
}

impl Drop for JokeServer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
