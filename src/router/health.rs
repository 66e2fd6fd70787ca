//! Liveness and readiness probes.

use axum::{extract::State, http::StatusCode, routing::get, Router};

use crate::state::AppState;
use crate::store::Store;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Returns "ok" if the server is running. Does not check the store.
async fn health() -> &'static str {
    "ok"
}

/// Returns 503 Service Unavailable if the store is not reachable.
async fn readiness(State(store): State<Store>) -> StatusCode {
    match store.ping().await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            tracing::warn!(error = %err, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
