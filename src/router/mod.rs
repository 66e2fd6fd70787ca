//! Routing module for the shop API

mod diagnostics;
mod health;

use axum::{extract::Request, middleware::Next, response::Response, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: AppState) -> Router {
    // Middleware: log failed requests
    let log_layer = axum::middleware::from_fn(log_failures);

    // Middleware: CORS (permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .merge(health::routes())
        .merge(crate::product::routes())
        .merge(crate::category::routes())
        .merge(crate::cart::routes());

    if state.config().echo_endpoint {
        tracing::debug!("Mounting diagnostic echo endpoint at /test");
        router = router.merge(diagnostics::routes());
    }

    router
        .layer(log_layer)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

async fn log_failures(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let res = next.run(req).await;
    if !res.status().is_success() {
        tracing::warn!(%method, %uri, status = %res.status(), "Request failed");
    }
    res
}
