//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identifier of a patient in the patient record service.
///
/// Always strictly positive; the collaborating services number patients
/// from 1 with 32-bit integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(i32);

impl PatientId {
    /// Creates a PatientId, rejecting zero and negative values.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if value < 1 {
            return Err(ValidationError::out_of_range(
                "patient_id",
                1,
                i32::MAX as i64,
                value as i64,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i32>()
            .map_err(|e| ValidationError::invalid_format("patient_id", e.to_string()))?;
        Self::new(value)
    }
}
