//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, errors)
//! - `patient` - Demographics consumed by the assessment
//! - `assessment` - Normalization, trigger matching and risk classification
//!
//! Everything here is synchronous and free of I/O.

pub mod assessment;
pub mod foundation;
pub mod patient;
