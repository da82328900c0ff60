//! GatewayPatientReader - PatientReader backed by the patient service.

use std::sync::Arc;

use async_trait::async_trait;

use super::client::GatewayClient;
use crate::domain::foundation::{AssessmentError, PatientId};
use crate::domain::patient::PatientRecord;
use crate::ports::PatientReader;

const SERVICE: &str = "patient";

/// Reads patients from `GET {gateway}/patients/{id}`.
pub struct GatewayPatientReader {
    client: Arc<GatewayClient>,
}

impl GatewayPatientReader {
    pub fn new(client: Arc<GatewayClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PatientReader for GatewayPatientReader {
    async fn fetch_patient(
        &self,
        patient_id: &PatientId,
    ) -> Result<Option<PatientRecord>, AssessmentError> {
        let path = format!("/patients/{}", patient_id);
        self.client.get_json::<PatientRecord>(SERVICE, &path).await
    }
}
