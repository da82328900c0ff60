//! HTTP routes for assessment endpoints.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use super::handlers::{get_assessment, AssessmentHandlers};
use crate::adapters::gateway::GatewayCredentials;
use crate::adapters::http::middleware::basic_auth_middleware;

/// Creates the assessment router. Every route requires gateway credentials.
pub fn assessment_routes(
    handlers: AssessmentHandlers,
    credentials: Arc<GatewayCredentials>,
) -> Router {
    Router::new()
        .route("/assessment/:patient_id", get(get_assessment))
        .route_layer(middleware::from_fn_with_state(
            credentials,
            basic_auth_middleware,
        ))
        .with_state(handlers)
}
