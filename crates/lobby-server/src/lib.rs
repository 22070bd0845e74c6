//! Lobby Server Library
//!
//! Read-only HTTP API over the lobby reference data: sports, leagues, chat
//! rooms and bet type multiplier configurations.

pub mod api;
pub mod middleware;

use axum::routing::get;
use axum::Router;
use lobby_db::DbPool;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared store handle.
    pub db: DbPool,
    /// Requests slower than this are logged as warnings.
    pub slow_request: Duration,
}

impl AppState {
    pub fn new(db: DbPool, slow_request: Duration) -> Self {
        Self { db, slow_request }
    }
}

/// Health check endpoint.
///
/// Returns "ok" to indicate the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Bind the listener for `host:port`.
///
/// `host` may be an IP address or a hostname such as `localhost`; the first
/// resolved address that binds is used.
pub async fn bind(host: &str, port: u16) -> std::io::Result<TcpListener> {
    TcpListener::bind((host, port)).await
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    // The lobby UI is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/sports", get(api::sports::list_sports))
        .route("/api/leagues", get(api::leagues::list_leagues))
        .route("/api/chat-rooms", get(api::chat_rooms::list_chat_rooms))
        .route(
            "/api/bet-type-configs",
            get(api::bet_type_configs::list_bet_type_configs),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.slow_request,
            middleware::timing_layer,
        ))
        .layer(cors)
        .with_state(state)
}
