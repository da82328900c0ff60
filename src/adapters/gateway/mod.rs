//! Gateway adapters - Patient and note readers over the API gateway.
//!
//! Every call carries the shared HTTP Basic credentials. A 404 from the
//! patient service means the patient does not exist; any other failure is
//! reported as the corresponding service being unavailable.

mod client;
mod credentials;
mod dto;
mod note_reader;
mod patient_reader;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::GatewayClient;
pub use credentials::GatewayCredentials;
pub use dto::NoteDto;
pub use note_reader::GatewayNoteReader;
pub use patient_reader::GatewayPatientReader;
