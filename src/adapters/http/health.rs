//! Liveness endpoint.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// GET /health - Always `{"status":"ok"}` while the process serves requests
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Unauthenticated health routes.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}
