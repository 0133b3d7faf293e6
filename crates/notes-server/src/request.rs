//! Request envelopes delivered to the handlers.
//!
//! The field names follow the invocation events of a function host
//! (`body`, `pathParameters.id`), so a platform event deserializes directly
//! into these types. Unknown event fields are ignored.

use notes_core::NoteId;
use serde::{Deserialize, Serialize};

/// Input to the create handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    /// Raw JSON body, as delivered by the host.
    #[serde(default)]
    pub body: Option<String>,
}

impl CreateNoteRequest {
    /// Request carrying `body`.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }
}

/// Path parameters of an id-addressed request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParameters {
    #[serde(default)]
    pub id: Option<String>,
}

/// Input to the get and delete handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRequest {
    #[serde(default)]
    pub path_parameters: Option<PathParameters>,
}

impl NoteRequest {
    /// Request addressing `id`.
    pub fn for_id(id: impl Into<String>) -> Self {
        Self {
            path_parameters: Some(PathParameters {
                id: Some(id.into()),
            }),
        }
    }

    /// The addressed note id. An empty id counts as absent.
    pub fn note_id(&self) -> Option<NoteId> {
        self.path_parameters
            .as_ref()
            .and_then(|p| p.id.as_deref())
            .filter(|id| !id.is_empty())
            .map(NoteId::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_request_from_event() {
        let event = r#"{"pathParameters":{"id":"123"},"httpMethod":"GET"}"#;
        let request: NoteRequest = serde_json::from_str(event).unwrap();
        assert_eq!(request.note_id(), Some(NoteId::from("123")));
    }

    #[test]
    fn test_missing_id_variants() {
        assert_eq!(NoteRequest::default().note_id(), None);

        let request: NoteRequest = serde_json::from_str(r#"{"pathParameters":null}"#).unwrap();
        assert_eq!(request.note_id(), None);

        let request: NoteRequest = serde_json::from_str(r#"{"pathParameters":{}}"#).unwrap();
        assert_eq!(request.note_id(), None);

        assert_eq!(NoteRequest::for_id("").note_id(), None);
    }

    #[test]
    fn test_create_request_from_event() {
        let event = r#"{"body":"{\"title\":\"Test Note\"}"}"#;
        let request: CreateNoteRequest = serde_json::from_str(event).unwrap();
        assert_eq!(request.body.as_deref(), Some(r#"{"title":"Test Note"}"#));

        let request: CreateNoteRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.body, None);
    }
}
