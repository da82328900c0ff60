//! Fake gateway for adapter tests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use super::client::GatewayClient;
use super::credentials::GatewayCredentials;
use crate::config::GatewayConfig;

pub(crate) const USERNAME: &str = "gateway";
pub(crate) const PASSWORD: &str = "gateway-secret";

pub(crate) struct FakeGateway {
    addr: SocketAddr,
}

impl FakeGateway {
    pub(crate) fn config(&self) -> GatewayConfig {
        GatewayConfig {
            url: format!("http://{}/", self.addr),
            username: USERNAME.to_string(),
            password: PASSWORD.to_string(),
            timeout_secs: 5,
        }
    }

    pub(crate) fn client(&self) -> GatewayClient {
        self.client_with(GatewayCredentials::new(USERNAME, PASSWORD))
    }

    pub(crate) fn client_with(&self, credentials: GatewayCredentials) -> GatewayClient {
        GatewayClient::new(&self.config(), Arc::new(credentials)).unwrap()
    }
}

/// Config pointing at a port nothing listens on.
pub(crate) fn unreachable_config() -> GatewayConfig {
    GatewayConfig {
        url: "http://127.0.0.1:9".to_string(),
        username: USERNAME.to_string(),
        password: PASSWORD.to_string(),
        timeout_secs: 2,
    }
}

/// Starts the fake gateway on an ephemeral port.
///
/// Patient ids: 1 is complete, 2 lacks a birth date, 404 is unknown,
/// 500 fails. Note ids: 1 has two notes (one with a null text), 2 has none,
/// 3 returns a body that is not a list, 404 is unknown, 500 fails.
pub(crate) async fn spawn_gateway() -> FakeGateway {
    let credentials = Arc::new(GatewayCredentials::new(USERNAME, PASSWORD));
    let app = Router::new()
        .route("/patients/:id", get(patient))
        .route("/notes/:id", get(notes))
        .with_state(credentials);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeGateway { addr }
}

fn authorized(credentials: &GatewayCredentials, headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| credentials.verify_basic_header(value))
        .unwrap_or(false)
}

async fn patient(
    State(credentials): State<Arc<GatewayCredentials>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Response {
    if !authorized(&credentials, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match id {
        1 => Json(json!({
            "id": 1,
            "firstName": "Test",
            "lastName": "TestEarlyOnset",
            "birthDate": "2002-06-21",
            "gender": "MALE"
        }))
        .into_response(),
        2 => Json(json!({ "id": 2, "gender": "FEMALE" })).into_response(),
        500 => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn notes(
    State(credentials): State<Arc<GatewayCredentials>>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Response {
    if !authorized(&credentials, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match id {
        1 => Json(json!([
            { "id": "a", "patId": 1, "noteText": "Le patient fume, Taille et Poids en hausse" },
            { "id": "b", "patId": 1, "noteText": null }
        ]))
        .into_response(),
        2 => Json(json!([])).into_response(),
        3 => Json(json!({ "noteText": "not a list" })).into_response(),
        500 => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
