//! API handlers for the lobby server.
//!
//! Every handler runs one query. On success it answers `200` with a JSON
//! object holding a single collection key; on any store failure it logs the
//! error and answers `500` with a fixed `{"error": ...}` message.

pub mod bet_type_configs;
pub mod chat_rooms;
pub mod leagues;
pub mod sports;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error body returned with a `500`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A failed fetch, answered with `500` and a fixed message.
///
/// The underlying store error is logged where it happens and never sent to
/// the client.
#[derive(Debug)]
pub struct ApiError {
    message: &'static str,
}

impl ApiError {
    /// Log `err` as the cause of `message` and build the error response.
    pub fn fetch_failed(message: &'static str, err: lobby_db::Error) -> Self {
        tracing::error!(error = %err, "{}", message);
        Self { message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::AppState;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use lobby_db::db::init_db;
    use std::time::Duration;

    pub fn test_state() -> AppState {
        let db = init_db(":memory:").expect("Failed to init test db");
        AppState::new(db, Duration::from_millis(100))
    }

    /// Drop `table` so the next query against it fails.
    pub fn break_table(state: &AppState, table: &str) {
        let conn = state.db.lock().unwrap();
        conn.execute_batch(&format!("DROP TABLE {table}")).unwrap();
    }

    /// Helper to extract response body as JSON
    pub async fn extract_json<T: serde::de::DeserializeOwned>(
        response: axum::response::Response,
    ) -> (StatusCode, T) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: T = serde_json::from_slice(&body).unwrap();
        (status, json)
    }
}
