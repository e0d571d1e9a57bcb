//! Furniro API library.
//!
//! This crate provides the API as a library, allowing the router to be
//! tested directly and embedded by serverless handler crates (where the
//! platform, not `main`, owns the listener).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod serialize;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router with CORS and request tracing applied.
///
/// The storefront is served from a different origin, so CORS is wide open
/// (matching the deployed backend this replaces).
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use secrecy::SecretString;
    use tower::ServiceExt;

    use super::*;
    use crate::config::{ApiConfig, StoreConfig};

    /// State with an unconnected store handle. The connection is lazy, so
    /// routes that never touch the store can be exercised offline.
    fn offline_state() -> AppState {
        AppState::new(ApiConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            store: StoreConfig {
                uri: SecretString::from("mongodb://localhost:27017"),
                database: "furniroDB".to_string(),
            },
            serverless: false,
            sentry_dsn: None,
        })
    }

    #[tokio::test]
    async fn test_health_responds_without_store() {
        let response = app(offline_state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_root_serves_welcome_message() {
        let response = app(offline_state())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["welcomeMessage"], "Furniro server is running");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = app(offline_state())
            .oneshot(
                Request::builder()
                    .uri("/no-such-route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
