//! PatientReader port for fetching patient demographics.

use async_trait::async_trait;

use crate::domain::foundation::{AssessmentError, PatientId};
use crate::domain::patient::PatientRecord;

/// Read access to the patient record service.
///
/// # Contract
///
/// Implementations must:
/// - Return `Ok(None)` when the patient does not exist
/// - Return the record as stored, without filling in missing fields
/// - Return `AssessmentError::UpstreamUnavailable` for transport failures
#[async_trait]
pub trait PatientReader: Send + Sync {
    /// Fetch the demographics of a patient.
    async fn fetch_patient(
        &self,
        patient_id: &PatientId,
    ) -> Result<Option<PatientRecord>, AssessmentError>;
}
