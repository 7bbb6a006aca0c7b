//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, healthz, hello, readyz, root};

/// Create the API router.
///
/// Exact-match paths, GET only; anything else falls through to the
/// framework defaults (404 for unknown paths, 405 for other methods).
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root))
        // Health endpoints for Kubernetes probes
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Backwards compatibility
        .route("/health", get(health))
        .route("/api/hello", get(hello))
        .layer(TraceLayer::new_for_http())
}
