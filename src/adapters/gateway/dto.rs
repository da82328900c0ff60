//! Wire shapes returned by the services behind the gateway.

use serde::Deserialize;

/// One entry of the note service's `/notes/{id}` list.
///
/// Other fields of the note document are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDto {
    #[serde(default)]
    pub note_text: Option<String>,
}
