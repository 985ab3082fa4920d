//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{add, health, not_found};

/// Create the API router.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/add", get(add))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}
