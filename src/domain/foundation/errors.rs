//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::PatientId;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes surfaced to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    PatientNotFound,
    IncompleteData,
    UpstreamUnavailable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::PatientNotFound => "PATIENT_NOT_FOUND",
            ErrorCode::IncompleteData => "INCOMPLETE_DATA",
            ErrorCode::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
        };
        write!(f, "{}", s)
    }
}

/// Reasons a risk assessment could not be produced.
///
/// Every variant aborts the assessment: the classifier never runs on
/// partial or defaulted inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// The patient collaborator has no record for this id.
    #[error("Patient with id {patient_id} not found")]
    PatientNotFound { patient_id: PatientId },

    /// The record exists but lacks a field the classifier needs.
    #[error("Patient {patient_id} has no usable {field}")]
    IncompleteData {
        patient_id: PatientId,
        field: &'static str,
    },

    /// A collaborator could not be reached or answered with garbage.
    #[error("{service} service unavailable: {reason}")]
    UpstreamUnavailable {
        service: &'static str,
        reason: String,
    },
}

impl AssessmentError {
    pub fn not_found(patient_id: PatientId) -> Self {
        AssessmentError::PatientNotFound { patient_id }
    }

    pub fn incomplete(patient_id: PatientId, field: &'static str) -> Self {
        AssessmentError::IncompleteData { patient_id, field }
    }

    pub fn upstream(service: &'static str, reason: impl Into<String>) -> Self {
        AssessmentError::UpstreamUnavailable {
            service,
            reason: reason.into(),
        }
    }

    /// Returns the API error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::PatientNotFound { .. } => ErrorCode::PatientNotFound,
            AssessmentError::IncompleteData { .. } => ErrorCode::IncompleteData,
            AssessmentError::UpstreamUnavailable { .. } => ErrorCode::UpstreamUnavailable,
        }
    }
}
