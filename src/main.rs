//! Diabetes assessment service binary.
//!
//! Reads configuration from `DIABETES_ASSESSMENT__*` environment variables
//! (and `.env` when present), wires the gateway readers into the assessment
//! handler and serves the HTTP API until Ctrl-C.

use std::error::Error;
use std::sync::Arc;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use diabetes_assessment::adapters::http::{app_router, cors_layer, AssessmentHandlers};
use diabetes_assessment::adapters::{
    GatewayClient, GatewayCredentials, GatewayNoteReader, GatewayPatientReader, SystemClock,
};
use diabetes_assessment::application::AssessRiskHandler;
use diabetes_assessment::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);
    tracing::debug!(?config, "Configuration loaded");

    let credentials = Arc::new(GatewayCredentials::from_config(&config.gateway));
    let client = Arc::new(GatewayClient::new(&config.gateway, credentials.clone())?);

    let handler = AssessRiskHandler::new(
        Arc::new(GatewayPatientReader::new(client.clone())),
        Arc::new(GatewayNoteReader::new(client)),
        Arc::new(SystemClock),
    );

    let app = app_router(AssessmentHandlers::new(Arc::new(handler)), credentials)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        gateway = config.gateway.base_url(),
        "Diabetes assessment service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Diabetes assessment service stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
