//! GatewayClient - Authenticated JSON GETs through the API gateway.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::credentials::GatewayCredentials;
use crate::config::GatewayConfig;
use crate::domain::foundation::AssessmentError;

/// Generic client for calling services behind the gateway.
pub struct GatewayClient {
    client: Client,
    base_url: String,
    credentials: Arc<GatewayCredentials>,
}

impl GatewayClient {
    /// Creates a client with the configured base URL and timeout.
    pub fn new(
        config: &GatewayConfig,
        credentials: Arc<GatewayCredentials>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            credentials,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GETs `path` and decodes the JSON body.
    ///
    /// Returns `Ok(None)` on 404. Every other failure (connection, timeout,
    /// non-success status, undecodable body) is reported as
    /// `UpstreamUnavailable` for `service`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        service: &'static str,
        path: &str,
    ) -> Result<Option<T>, AssessmentError> {
        let url = self.url(path);
        tracing::debug!("Calling gateway {} for {} service", url, service);

        let response = self
            .client
            .get(&url)
            .basic_auth(self.credentials.username(), Some(self.credentials.password()))
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    "request timed out".to_string()
                } else if e.is_connect() {
                    format!("connection failed: {}", e)
                } else {
                    e.to_string()
                };
                tracing::error!("Gateway call failed for {}: {}", url, reason);
                AssessmentError::upstream(service, reason)
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("Gateway returned 404 for {}", url);
            return Ok(None);
        }
        if !status.is_success() {
            tracing::error!("Gateway returned {} for {}", status, url);
            return Err(AssessmentError::upstream(
                service,
                format!("gateway returned {}", status),
            ));
        }

        response.json::<T>().await.map(Some).map_err(|e| {
            tracing::error!("Undecodable response from {}: {}", url, e);
            AssessmentError::upstream(service, format!("invalid response body: {}", e))
        })
    }
}
