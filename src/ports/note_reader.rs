//! NoteReader port for fetching a patient's clinical notes.

use async_trait::async_trait;

use crate::domain::foundation::{AssessmentError, PatientId};

/// Read access to the note service.
///
/// # Contract
///
/// - A patient without notes yields `Ok(vec![])`, never an error
/// - Notes keep the order the note service returns them in
/// - Transport failures map to `AssessmentError::UpstreamUnavailable`
#[async_trait]
pub trait NoteReader: Send + Sync {
    /// Fetch the free-text notes written for a patient.
    async fn fetch_notes(&self, patient_id: &PatientId) -> Result<Vec<String>, AssessmentError>;
}
