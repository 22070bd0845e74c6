//! Request timing middleware.
//!
//! Logs method, path, status and duration of every request. Requests over
//! the configured threshold are logged at `warn`, the rest at `debug`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};

/// Middleware that logs request timing.
///
/// Install with `axum::middleware::from_fn_with_state(threshold, timing_layer)`.
pub async fn timing_layer(
    State(slow_request): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    let status = response.status().as_u16();

    if elapsed > slow_request {
        tracing::warn!(
            method = %method,
            path = %path,
            status = status,
            duration_ms = elapsed.as_millis(),
            "Slow request"
        );
    } else {
        tracing::debug!(
            method = %method,
            path = %path,
            status = status,
            duration_ms = elapsed.as_millis(),
            "Request completed"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn fast_handler() -> &'static str {
        "ok"
    }

    async fn slow_handler() -> &'static str {
        tokio::time::sleep(Duration::from_millis(20)).await;
        "slow"
    }

    fn app(threshold: Duration) -> Router {
        Router::new()
            .route("/fast", get(fast_handler))
            .route("/slow", get(slow_handler))
            .layer(middleware::from_fn_with_state(threshold, timing_layer))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_fast_request_passes_through() {
        let (status, body) = get_body(app(Duration::from_millis(100)), "/fast").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_slow_request_passes_through() {
        let (status, body) = get_body(app(Duration::from_millis(1)), "/slow").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"slow");
    }

    #[tokio::test]
    async fn test_status_of_unmatched_route_preserved() {
        let (status, _) = get_body(app(Duration::from_millis(100)), "/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
