//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the public surface:
//!
//! - `GET /health` - liveness, no authentication
//! - `GET /assessment/:patient_id` - risk assessment, gateway credentials required

pub mod assessment;
pub mod health;
pub mod middleware;

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::adapters::gateway::GatewayCredentials;
use crate::config::ServerConfig;

pub use assessment::{assessment_routes, AssessmentHandlers};
pub use health::health_routes;

/// Builds the application router.
pub fn app_router(handlers: AssessmentHandlers, credentials: Arc<GatewayCredentials>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(assessment_routes(handlers, credentials))
}

/// CORS policy from the configured origins. No origins means no cross-origin access.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
}
