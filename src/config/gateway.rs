//! API gateway configuration
//!
//! The assessment service reaches the patient and note services through the
//! gateway, and only accepts requests carrying the same gateway credentials.

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use super::error::ValidationError;

/// Gateway configuration
#[derive(Clone, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the API gateway (e.g. `http://gateway:8080`)
    pub url: String,

    /// HTTP Basic username shared by internal services
    pub username: String,

    /// HTTP Basic password shared by internal services
    pub password: String,

    /// Timeout for each call to the gateway, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl GatewayConfig {
    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__URL"));
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ValidationError::InvalidGatewayUrl);
        }
        if self.username.is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__USERNAME"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__PASSWORD"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_timeout() -> u64 {
    10
}
