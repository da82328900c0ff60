//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `gateway` - Patient and note readers over the API gateway (reqwest)
//! - `memory` - In-process readers and clocks
//! - `http` - REST surface (axum)

pub mod gateway;
pub mod http;
pub mod memory;

pub use gateway::{GatewayClient, GatewayCredentials, GatewayNoteReader, GatewayPatientReader};
pub use memory::{FixedClock, InMemoryNoteReader, InMemoryPatientReader, SystemClock};
