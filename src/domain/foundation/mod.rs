//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error types shared by the assessment domain.

mod errors;
mod ids;

pub use errors::{AssessmentError, ErrorCode, ValidationError};
pub use ids::PatientId;
