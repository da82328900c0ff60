//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{AssessRiskHandler, AssessRiskQuery};
use crate::domain::foundation::{AssessmentError, PatientId};

use super::dto::{ErrorResponse, RiskAssessmentResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    assess_risk: Arc<AssessRiskHandler>,
}

impl AssessmentHandlers {
    pub fn new(assess_risk: Arc<AssessRiskHandler>) -> Self {
        Self { assess_risk }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /assessment/:patient_id - Assess a patient's diabetes risk
pub async fn get_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(raw_id): Path<String>,
) -> Response {
    let patient_id: PatientId = match raw_id.parse() {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!("Rejected patient id {:?}: {}", raw_id, e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response();
        }
    };

    match handlers.assess_risk.handle(AssessRiskQuery { patient_id }).await {
        Ok(assessment) => {
            let response: RiskAssessmentResponse = assessment.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_assessment_error(error: AssessmentError) -> Response {
    let status = match &error {
        AssessmentError::PatientNotFound { .. } => StatusCode::NOT_FOUND,
        AssessmentError::IncompleteData { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AssessmentError::UpstreamUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(ErrorResponse::from(&error))).into_response()
}
