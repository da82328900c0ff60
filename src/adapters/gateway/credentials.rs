//! HTTP Basic credentials shared between the gateway and internal services.
//!
//! The same pair is sent on outbound calls and required on inbound ones.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

use crate::config::GatewayConfig;

/// Username and password for gateway-to-service authentication.
pub struct GatewayCredentials {
    username: String,
    password: Secret<String>,
}

impl GatewayCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password.into()),
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(config.username.clone(), config.password.clone())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exposes the password (for making requests).
    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }

    /// Value of an `Authorization` header carrying these credentials.
    pub fn basic_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password());
        format!("Basic {}", STANDARD.encode(raw))
    }

    /// Checks an `Authorization` header value against these credentials.
    ///
    /// Both fields are compared in constant time.
    pub fn verify_basic_header(&self, header: &str) -> bool {
        let Some(encoded) = header.strip_prefix("Basic ") else {
            return false;
        };
        let Ok(decoded) = STANDARD.decode(encoded.trim()) else {
            return false;
        };
        let Ok(decoded) = String::from_utf8(decoded) else {
            return false;
        };
        let Some((username, password)) = decoded.split_once(':') else {
            return false;
        };

        let username_ok = username.as_bytes().ct_eq(self.username.as_bytes());
        let password_ok = password.as_bytes().ct_eq(self.password().as_bytes());
        (username_ok & password_ok).into()
    }
}

impl std::fmt::Debug for GatewayCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
