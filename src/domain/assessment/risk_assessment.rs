use serde::{Deserialize, Serialize};

use super::normalizer::tokenize;
use super::RiskLevel;
use crate::domain::foundation::PatientId;

/// Outcome of a diabetes risk assessment. Built per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub patient_id: PatientId,
    pub risk_level: RiskLevel,
}

impl RiskAssessment {
    pub fn new(patient_id: PatientId, risk_level: RiskLevel) -> Self {
        Self {
            patient_id,
            risk_level,
        }
    }
}

/// Tokens of all notes, in note order. Blank notes contribute nothing.
pub fn note_tokens<S: AsRef<str>>(notes: &[S]) -> Vec<String> {
    notes
        .iter()
        .map(AsRef::as_ref)
        .filter(|text| !text.trim().is_empty())
        .flat_map(tokenize)
        .collect()
}
