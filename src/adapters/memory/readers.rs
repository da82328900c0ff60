//! In-memory patient and note readers.
//!
//! Used by the integration tests and for running the service without the
//! gateway.
//!
//! # Example
//!
//! ```ignore
//! use diabetes_assessment::adapters::memory::InMemoryPatientReader;
//!
//! let patients = InMemoryPatientReader::new()
//!     .with_patient(PatientId::new(1).unwrap(), record);
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AssessmentError, PatientId};
use crate::domain::patient::PatientRecord;
use crate::ports::{NoteReader, PatientReader};

/// Patient reader over a fixed set of records.
#[derive(Debug, Default)]
pub struct InMemoryPatientReader {
    patients: HashMap<PatientId, PatientRecord>,
    force_error: Option<AssessmentError>,
}

impl InMemoryPatientReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a patient record.
    pub fn with_patient(mut self, patient_id: PatientId, record: PatientRecord) -> Self {
        self.patients.insert(patient_id, record);
        self
    }

    /// Makes every read fail with `error`.
    pub fn with_error(mut self, error: AssessmentError) -> Self {
        self.force_error = Some(error);
        self
    }
}

#[async_trait]
impl PatientReader for InMemoryPatientReader {
    async fn fetch_patient(
        &self,
        patient_id: &PatientId,
    ) -> Result<Option<PatientRecord>, AssessmentError> {
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }
        Ok(self.patients.get(patient_id).cloned())
    }
}

/// Note reader over a fixed set of notes per patient.
///
/// Patients without an entry have no notes.
#[derive(Debug, Default)]
pub struct InMemoryNoteReader {
    notes: HashMap<PatientId, Vec<String>>,
    force_error: Option<AssessmentError>,
}

impl InMemoryNoteReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends notes for a patient.
    pub fn with_notes<I, S>(mut self, patient_id: PatientId, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notes
            .entry(patient_id)
            .or_default()
            .extend(notes.into_iter().map(Into::into));
        self
    }

    /// Makes every read fail with `error`.
    pub fn with_error(mut self, error: AssessmentError) -> Self {
        self.force_error = Some(error);
        self
    }
}

#[async_trait]
impl NoteReader for InMemoryNoteReader {
    async fn fetch_notes(&self, patient_id: &PatientId) -> Result<Vec<String>, AssessmentError> {
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }
        Ok(self.notes.get(patient_id).cloned().unwrap_or_default())
    }
}
