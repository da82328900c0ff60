//! Patient demographics as seen by the assessment engine.
//!
//! The patient service owns the full record; the assessment only needs a
//! birth date and a gender. `PatientRecord` is what the collaborator hands
//! back (fields may be missing), `PatientProfile` is the validated form the
//! classifier consumes.

mod gender;
mod profile;

pub use gender::Gender;
pub use profile::{PatientProfile, PatientRecord};
