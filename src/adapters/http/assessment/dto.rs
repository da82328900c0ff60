//! HTTP DTOs for assessment endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{RiskAssessment, RiskLevel};
use crate::domain::foundation::{AssessmentError, ErrorCode};

/// Body of a successful `GET /assessment/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessmentResponse {
    pub patient_id: i32,
    pub risk_level: RiskLevel,
}

impl From<RiskAssessment> for RiskAssessmentResponse {
    fn from(assessment: RiskAssessment) -> Self {
        Self {
            patient_id: assessment.patient_id.value(),
            risk_level: assessment.risk_level,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed.to_string(),
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            code: "UNAUTHORIZED".to_string(),
            message: "Valid gateway credentials required".to_string(),
        }
    }
}

impl From<&AssessmentError> for ErrorResponse {
    fn from(error: &AssessmentError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}
