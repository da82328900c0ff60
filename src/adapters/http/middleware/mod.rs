//! HTTP middleware for axum.
//!
//! - `auth` - HTTP Basic check against the gateway credentials

pub mod auth;

pub use auth::basic_auth_middleware;
