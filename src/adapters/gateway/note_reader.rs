//! GatewayNoteReader - NoteReader backed by the note service.

use std::sync::Arc;

use async_trait::async_trait;

use super::client::GatewayClient;
use super::dto::NoteDto;
use crate::domain::foundation::{AssessmentError, PatientId};
use crate::ports::NoteReader;

const SERVICE: &str = "note";

/// Reads note texts from `GET {gateway}/notes/{id}`.
pub struct GatewayNoteReader {
    client: Arc<GatewayClient>,
}

impl GatewayNoteReader {
    pub fn new(client: Arc<GatewayClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NoteReader for GatewayNoteReader {
    async fn fetch_notes(&self, patient_id: &PatientId) -> Result<Vec<String>, AssessmentError> {
        let path = format!("/notes/{}", patient_id);
        let notes = self
            .client
            .get_json::<Vec<NoteDto>>(SERVICE, &path)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Note service has no notes resource for patient {}", patient_id);
                AssessmentError::upstream(SERVICE, "notes resource not found")
            })?;

        Ok(notes.into_iter().filter_map(|note| note.note_text).collect())
    }
}
