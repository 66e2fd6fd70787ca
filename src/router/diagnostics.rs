//! Raw-echo endpoint for test harnesses. Not part of the product surface.

use axum::{routing::post, Router};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/test", post(echo))
}

/// Endpoint: POST /test
/// Returns the request body verbatim as text, whatever its content type.
async fn echo(body: String) -> String {
    body
}
