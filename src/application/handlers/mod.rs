//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{AssessRiskHandler, AssessRiskQuery};
