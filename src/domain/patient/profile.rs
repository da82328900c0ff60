use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Gender;
use crate::domain::foundation::{AssessmentError, PatientId};

/// Demographics as returned by the patient collaborator.
///
/// Both fields are optional on the wire; [`PatientProfile::from_record`]
/// refuses to build a profile when either is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl PatientRecord {
    pub fn new(birth_date: NaiveDate, gender: Gender) -> Self {
        Self {
            birth_date: Some(birth_date),
            gender: Some(gender),
        }
    }
}

/// Validated demographics consumed by the risk classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatientProfile {
    age: u32,
    gender: Gender,
}

impl PatientProfile {
    pub fn new(age: u32, gender: Gender) -> Self {
        Self { age, gender }
    }

    /// Builds a profile from a collaborator record, computing the age in
    /// whole years as of `today`.
    ///
    /// # Errors
    ///
    /// `IncompleteData` when the birth date or gender is missing, or when
    /// the birth date lies after `today`.
    pub fn from_record(
        patient_id: PatientId,
        record: &PatientRecord,
        today: NaiveDate,
    ) -> Result<Self, AssessmentError> {
        let birth_date = record
            .birth_date
            .ok_or_else(|| AssessmentError::incomplete(patient_id, "birthDate"))?;
        let gender = record
            .gender
            .ok_or_else(|| AssessmentError::incomplete(patient_id, "gender"))?;
        let age = age_on(birth_date, today)
            .ok_or_else(|| AssessmentError::incomplete(patient_id, "birthDate"))?;

        Ok(Self { age, gender })
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }
}

/// Whole years elapsed between `birth_date` and `today`, or `None` if the
/// birth date is in the future.
fn age_on(birth_date: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birth_date > today {
        return None;
    }
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn patient() -> PatientId {
        PatientId::new(1).unwrap()
    }

    #[test]
    fn age_counts_whole_years() {
        assert_eq!(age_on(date(1980, 6, 15), date(2025, 6, 14)), Some(44));
        assert_eq!(age_on(date(1980, 6, 15), date(2025, 6, 15)), Some(45));
        assert_eq!(age_on(date(2025, 6, 15), date(2025, 6, 15)), Some(0));
    }

    #[test]
    fn leap_day_birthday_waits_for_march() {
        assert_eq!(age_on(date(2000, 2, 29), date(2001, 2, 28)), Some(0));
        assert_eq!(age_on(date(2000, 2, 29), date(2001, 3, 1)), Some(1));
    }

    #[test]
    fn future_birth_date_has_no_age() {
        assert_eq!(age_on(date(2030, 1, 1), date(2025, 1, 1)), None);
    }

    #[test]
    fn thirtieth_birthday_is_thirty() {
        let record = PatientRecord::new(date(1995, 6, 15), Gender::Male);
        let profile = PatientProfile::from_record(patient(), &record, date(2025, 6, 15)).unwrap();
        assert_eq!(profile, PatientProfile::new(30, Gender::Male));
        assert_eq!(profile.age(), 30);
        assert_eq!(profile.gender(), Gender::Male);
    }

    #[test]
    fn missing_birth_date_is_incomplete() {
        let record = PatientRecord {
            birth_date: None,
            gender: Some(Gender::Female),
        };
        let err = PatientProfile::from_record(patient(), &record, date(2025, 1, 1)).unwrap_err();
        assert_eq!(err, AssessmentError::incomplete(patient(), "birthDate"));
    }

    #[test]
    fn missing_gender_is_incomplete() {
        let record = PatientRecord {
            birth_date: Some(date(1990, 1, 1)),
            gender: None,
        };
        let err = PatientProfile::from_record(patient(), &record, date(2025, 1, 1)).unwrap_err();
        assert_eq!(err, AssessmentError::incomplete(patient(), "gender"));
    }

    #[test]
    fn record_deserializes_from_patient_service_payload() {
        let json = r#"{
            "id": 1,
            "name": "Test",
            "firstName": "TestNone",
            "birthDate": "1966-12-31",
            "gender": "FEMALE",
            "address": "1 Brookside St",
            "phone": "100-222-3333"
        }"#;
        let record: PatientRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, PatientRecord::new(date(1966, 12, 31), Gender::Female));
    }

    #[test]
    fn record_tolerates_missing_fields() {
        let record: PatientRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, PatientRecord::default());
    }
}
