//! HTTP Basic authentication middleware.
//!
//! Only the gateway calls this service, and it does so with the shared
//! gateway credentials. Requests without them are rejected before reaching
//! a handler.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::get, middleware};
//! use std::sync::Arc;
//!
//! let credentials = Arc::new(GatewayCredentials::new("gateway", "secret"));
//!
//! let app = Router::new()
//!     .route("/assessment/:patient_id", get(get_assessment))
//!     .route_layer(middleware::from_fn_with_state(credentials, basic_auth_middleware));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::gateway::GatewayCredentials;
use crate::adapters::http::assessment::ErrorResponse;

const CHALLENGE: &str = r#"Basic realm="diabetes-assessment""#;

/// Rejects requests whose `Authorization` header does not carry the
/// gateway credentials with 401 and a Basic challenge.
pub async fn basic_auth_middleware(
    State(credentials): State<Arc<GatewayCredentials>>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|h| credentials.verify_basic_header(h))
        .unwrap_or(false);

    if authorized {
        return next.run(request).await;
    }

    tracing::warn!(
        method = %request.method(),
        uri = %request.uri(),
        "Rejected request without valid gateway credentials"
    );
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, CHALLENGE)],
        Json(ErrorResponse::unauthorized()),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        let credentials = Arc::new(GatewayCredentials::new("gateway", "gateway-secret"));
        Router::new()
            .route("/protected", get(|| async { "ok" }))
            .route_layer(middleware::from_fn_with_state(credentials, basic_auth_middleware))
    }

    async fn status_for(authorization: Option<&str>) -> StatusCode {
        let mut builder = HttpRequest::builder().uri("/protected");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn valid_credentials_pass() {
        let header = GatewayCredentials::new("gateway", "gateway-secret").basic_header();
        assert_eq!(status_for(Some(&header)).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        assert_eq!(status_for(None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let header = GatewayCredentials::new("gateway", "nope").basic_header();
        assert_eq!(status_for(Some(&header)).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn bearer_token_is_unauthorized() {
        assert_eq!(status_for(Some("Bearer abc")).await, StatusCode::UNAUTHORIZED);
    }
}
