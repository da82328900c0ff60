//! AssessRisk - Query handler computing a patient's diabetes risk level.
//!
//! Fetches demographics and notes through the reader ports, then runs the
//! pure assessment pipeline:
//!
//! 1. Both fetches run concurrently; if either fails the query fails
//! 2. A missing patient is `PatientNotFound`
//! 3. A record without birth date or gender is `IncompleteData`
//! 4. Notes are tokenized, triggers counted, and the count classified
//!
//! A fetch failure takes precedence over a missing patient: when the
//! patient is unknown and the note service is down at the same time the
//! query fails with `UpstreamUnavailable`, not `PatientNotFound`. Both
//! fetches must succeed before the patient record is inspected.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::assessment::{
    classify_factors, diabetes_triggers, matched_triggers, note_tokens, RiskAssessment,
    RiskFactors, TriggerVocabulary,
};
use crate::domain::foundation::{AssessmentError, PatientId};
use crate::domain::patient::PatientProfile;
use crate::ports::{Clock, NoteReader, PatientReader};

/// Query to assess the diabetes risk of one patient.
#[derive(Debug, Clone, Copy)]
pub struct AssessRiskQuery {
    pub patient_id: PatientId,
}

/// Handler for diabetes risk assessments.
pub struct AssessRiskHandler {
    patients: Arc<dyn PatientReader>,
    notes: Arc<dyn NoteReader>,
    clock: Arc<dyn Clock>,
    vocabulary: &'static TriggerVocabulary,
}

impl AssessRiskHandler {
    pub fn new(
        patients: Arc<dyn PatientReader>,
        notes: Arc<dyn NoteReader>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            patients,
            notes,
            clock,
            vocabulary: diabetes_triggers(),
        }
    }

    pub async fn handle(&self, query: AssessRiskQuery) -> Result<RiskAssessment, AssessmentError> {
        let patient_id = query.patient_id;
        info!(%patient_id, "Creating diabetes assessment");

        let fetched = tokio::try_join!(
            self.patients.fetch_patient(&patient_id),
            self.notes.fetch_notes(&patient_id),
        );
        let (record, notes) = match fetched {
            Ok(fetched) => fetched,
            Err(e) => {
                warn!(%patient_id, error = %e, "Assessment aborted while fetching patient data");
                return Err(e);
            }
        };

        let record = record.ok_or_else(|| {
            warn!(%patient_id, "Patient not found");
            AssessmentError::not_found(patient_id)
        })?;
        let profile = PatientProfile::from_record(patient_id, &record, self.clock.today())
            .map_err(|e| {
                warn!(%patient_id, error = %e, "Patient data incomplete");
                e
            })?;

        if notes.is_empty() {
            warn!(%patient_id, "No notes to analyse");
        }

        let tokens = note_tokens(&notes);
        let matched = matched_triggers(&tokens, self.vocabulary);
        let factors = RiskFactors {
            age: profile.age(),
            gender: profile.gender(),
            trigger_count: matched.len(),
        };
        debug!(
            %patient_id,
            age = factors.age,
            gender = %factors.gender,
            notes = notes.len(),
            words = tokens.len(),
            triggers = factors.trigger_count,
            matched = ?matched.iter().map(|t| t.label()).collect::<Vec<_>>(),
            "Assessment inputs"
        );

        let classification = classify_factors(&factors);
        let risk_level = classification.level;
        debug!(
            %patient_id,
            rule = classification.rule.map(|r| r.name).unwrap_or("no rule matched"),
            "Risk rule selected"
        );
        info!(%patient_id, %risk_level, "Risk assessment computed");

        Ok(RiskAssessment::new(patient_id, risk_level))
    }
}
