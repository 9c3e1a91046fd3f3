//! API Routes
//!
//! Configures the Axum router with all Pokédex endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_cache_handler, detail_handler, health_handler, list_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /pokemon?page=&search=` - Current page, filtered, with summary
/// - `GET /pokemon/:name` - Detail for one Pokémon
/// - `GET /stats` - Page cache statistics
/// - `DELETE /cache` - Drop all cached pages
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin so a browser UI can call the service directly
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/pokemon", get(list_handler))
        .route("/pokemon/:name", get(detail_handler))
        .route("/stats", get(stats_handler))
        .route("/cache", delete(clear_cache_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::cache::MemoryStorage;
    use crate::client::PokemonSource;
    use crate::config::Config;
    use crate::error::{PokedexError, Result};
    use crate::models::{PageResult, PokemonDetail};

    /// Source whose remote API is always down.
    struct DownSource;

    #[async_trait]
    impl PokemonSource for DownSource {
        async fn fetch_page(&self, _offset: u64, _limit: u32) -> Result<PageResult> {
            Err(PokedexError::Network("connection refused".to_string()))
        }

        async fn fetch_detail(&self, _url: &str) -> Result<PokemonDetail> {
            Err(PokedexError::Network("connection refused".to_string()))
        }

        fn detail_url(&self, name: &str) -> String {
            format!("http://localhost/pokemon/{}", name)
        }
    }

    fn create_test_app() -> Router {
        let state = AppState::from_config(
            &Config::default(),
            Arc::new(DownSource),
            Arc::new(MemoryStorage::new()),
        );
        create_router(state)
    }

    async fn status_of(app: Router, method: &str, uri: &str) -> StatusCode {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of(create_test_app(), "GET", "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        assert_eq!(status_of(create_test_app(), "GET", "/stats").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_failure_is_reported_in_body() {
        // List errors are state, not HTTP failures
        assert_eq!(status_of(create_test_app(), "GET", "/pokemon?page=1").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_bad_page() {
        assert_eq!(
            status_of(create_test_app(), "GET", "/pokemon?page=0").await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(create_test_app(), "GET", "/pokemon?page=abc").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_detail_upstream_down() {
        assert_eq!(
            status_of(create_test_app(), "GET", "/pokemon/pikachu").await,
            StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn test_clear_cache_endpoint() {
        assert_eq!(status_of(create_test_app(), "DELETE", "/cache").await, StatusCode::OK);
    }
}
