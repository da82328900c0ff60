//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PatientReader` - Demographics from the patient service
//! - `NoteReader` - Clinical notes from the note service
//! - `Clock` - Today's date, for age computation

mod clock;
mod note_reader;
mod patient_reader;

pub use clock::Clock;
pub use note_reader::NoteReader;
pub use patient_reader::PatientReader;
