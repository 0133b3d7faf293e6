//! Core data types for the notes backend.
//!
//! A `Note` is the only persisted entity. Notes are immutable once written:
//! they are created, read, listed and deleted, never updated.
//!
//! All types serialize with camelCase field names, which is the shape the
//! document store holds and the shape callers receive.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// Assigned by the system at creation time from the creation timestamp in
/// milliseconds, rendered as a decimal string. Ids read back from the store or
/// from a request path are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Creates a NoteId from a millisecond timestamp.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Note
// ============================================================================

/// A title/content pair that has passed validation.
///
/// Only `validate_note` constructs drafts outside of tests, so holding a
/// `NoteDraft` means the length constraints were satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub(crate) title: String,
    pub(crate) content: String,
}

impl NoteDraft {
    /// The validated title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The validated content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// System-assigned identifier, the store key.
    pub note_id: NoteId,
    /// Title, 3 to 100 characters at creation.
    pub title: String,
    /// Body text, at least 5 characters at creation.
    pub content: String,
    /// ISO-8601 creation time. Hand-seeded items may not carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Note {
    /// Build a note from a validated draft.
    pub fn from_draft(note_id: NoteId, draft: NoteDraft, created_at: impl Into<String>) -> Self {
        Self {
            note_id,
            title: draft.title,
            content: draft.content,
            created_at: Some(created_at.into()),
        }
    }
}

/// Render a timestamp as ISO-8601 UTC with millisecond precision,
/// e.g. `2024-01-01T00:00:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_note_id_from_millis() {
        let id = NoteId::from_millis(1_700_000_000_123);
        assert_eq!(id.as_str(), "1700000000123");
        assert_eq!(id.to_string(), "1700000000123");
    }

    #[test]
    fn test_note_id_serializes_as_plain_string() {
        let id = NoteId::from("123");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""123""#);
    }

    #[test]
    fn test_note_serializes_camel_case() {
        let note = Note {
            note_id: NoteId::from("42"),
            title: "Test Note".to_string(),
            content: "Test Content".to_string(),
            created_at: Some("2024-01-01T00:00:00.000Z".to_string()),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["noteId"], "42");
        assert_eq!(json["title"], "Test Note");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_note_without_created_at_round_trips() {
        let json = r#"{"noteId":"123","title":"Test Note","content":"Test Content"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.created_at, None);
        let back = serde_json::to_string(&note).unwrap();
        assert!(!back.contains("createdAt"));
    }

    #[test]
    fn test_format_timestamp_millis() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();
        assert_eq!(format_timestamp(at), "2024-01-01T12:30:00.000Z");
    }
}
