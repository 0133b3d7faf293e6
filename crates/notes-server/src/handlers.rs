//! Note request handlers.
//!
//! Each handler is one pass through `Parsing -> Validating (create only) ->
//! Persisting -> Responding`. The fallible part of every handler returns
//! `Result<Envelope, HandlerError>`; `respond` is the single boundary that
//! turns either outcome, or a panic, into an envelope.
//!
//! | Handler | Success | Client errors | Server error |
//! |---------|---------|---------------|--------------|
//! | create  | 201 `{message, noteId}` | 400 | 500 |
//! | get     | 200 note | 400, 404 | 500 |
//! | list    | 200 `[note, ...]` | - | 500 |
//! | delete  | 200 `{message}` | 400 | 500 |

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use axum::http::StatusCode;
use chrono::Utc;
use futures::FutureExt;
use notes_core::{Note, format_timestamp, validate_note};
use notes_store::NoteStore;

use crate::envelope::{Envelope, ResponseBuilder};
use crate::error::HandlerError;
use crate::ids::NoteIdGenerator;
use crate::request::{CreateNoteRequest, NoteRequest};

/// Confirmation message for a created note.
pub const NOTE_CREATED: &str = "Note created successfully!";

/// Confirmation message for a deleted note.
pub const NOTE_DELETED: &str = "Note deleted successfully!";

/// The four note handlers and their injected dependencies.
#[derive(Debug)]
pub struct NoteHandlers {
    notes: NoteStore,
    ids: NoteIdGenerator,
    responses: ResponseBuilder,
}

impl NoteHandlers {
    /// Create handlers over a note store.
    pub fn new(notes: NoteStore, responses: ResponseBuilder) -> Self {
        Self {
            notes,
            ids: NoteIdGenerator::new(),
            responses,
        }
    }

    /// Get a reference to the note store.
    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    /// Create a note from a `{title, content}` body.
    pub async fn create_note(&self, request: CreateNoteRequest) -> Envelope {
        tracing::info!(
            body_len = request.body.as_ref().map(String::len),
            "Received request to create a note"
        );
        self.respond("create_note", self.try_create_note(request))
            .await
    }

    /// Create a note from a raw HTTP body.
    ///
    /// An empty body is a missing body; bytes that are not UTF-8 cannot be
    /// JSON and are rejected as such.
    pub async fn create_note_from_bytes(&self, body: &[u8]) -> Envelope {
        if body.is_empty() {
            return self.create_note(CreateNoteRequest::default()).await;
        }
        match std::str::from_utf8(body) {
            Ok(text) => self.create_note(CreateNoteRequest::with_body(text)).await,
            Err(e) => {
                tracing::info!(body_len = body.len(), "Received request to create a note");
                self.respond("create_note", async move {
                    Err(HandlerError::InvalidEncoding(e))
                })
                .await
            }
        }
    }

    async fn try_create_note(&self, request: CreateNoteRequest) -> Result<Envelope, HandlerError> {
        let body = request.body.ok_or(HandlerError::MissingBody)?;
        let candidate: serde_json::Value =
            serde_json::from_str(&body).map_err(HandlerError::InvalidJson)?;

        let draft = validate_note(&candidate)?;

        let now = Utc::now();
        let note = Note::from_draft(self.ids.issue(now), draft, format_timestamp(now));
        self.notes.create(&note).await?;

        tracing::info!(note_id = %note.note_id, "Note created");
        Ok(self.responses.message_with_id(
            StatusCode::CREATED,
            NOTE_CREATED,
            note.note_id.as_str(),
        ))
    }

    /// Fetch one note by path id.
    pub async fn get_note(&self, request: NoteRequest) -> Envelope {
        let note_id = request.note_id();
        tracing::info!(note_id = ?note_id.as_ref().map(|id| id.as_str()), "Fetching note");
        self.respond("get_note", async move {
            let note_id = note_id.ok_or(HandlerError::MissingNoteId)?;
            let note = self
                .notes
                .get(&note_id)
                .await?
                .ok_or(HandlerError::NotFound)?;

            tracing::info!(note_id = %note_id, "Fetched note");
            Ok(self.responses.json(StatusCode::OK, &note))
        })
        .await
    }

    /// Fetch every note as a bare JSON array.
    pub async fn list_notes(&self) -> Envelope {
        tracing::info!("Received request to fetch all notes");
        self.respond("list_notes", async {
            let notes = self.notes.list().await?;
            tracing::info!(count = notes.len(), "Fetched all notes");
            Ok(self.responses.json(StatusCode::OK, &notes))
        })
        .await
    }

    /// Delete a note by path id. Deleting an absent id still succeeds.
    pub async fn delete_note(&self, request: NoteRequest) -> Envelope {
        let note_id = request.note_id();
        tracing::info!(note_id = ?note_id.as_ref().map(|id| id.as_str()), "Deleting note");
        self.respond("delete_note", async move {
            let note_id = note_id.ok_or(HandlerError::MissingNoteId)?;
            self.notes.delete(&note_id).await?;

            tracing::info!(note_id = %note_id, "Note deleted");
            Ok(self.responses.message(StatusCode::OK, NOTE_DELETED))
        })
        .await
    }

    /// Run one invocation to an envelope, whatever happens inside it.
    async fn respond<F>(&self, handler: &'static str, invocation: F) -> Envelope
    where
        F: Future<Output = Result<Envelope, HandlerError>>,
    {
        let outcome = AssertUnwindSafe(invocation)
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(HandlerError::Unexpected(panic_message(panic.as_ref()))));

        match outcome {
            Ok(envelope) => envelope,
            Err(err) => {
                log_failure(handler, &err);
                err.into_envelope(&self.responses)
            }
        }
    }
}

fn log_failure(handler: &'static str, err: &HandlerError) {
    match err {
        HandlerError::Storage(source) => tracing::error!(
            handler,
            operation = source.operation(),
            error = %source,
            "Note store failed"
        ),
        HandlerError::Unexpected(reason) => {
            tracing::error!(handler, error = %reason, "Handler failed unexpectedly")
        }
        HandlerError::Validation(violation) => tracing::warn!(
            handler,
            field = %violation.field,
            error = %violation,
            "Validation failed"
        ),
        other => tracing::warn!(handler, error = %other, "Rejected request"),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use notes_core::NoteId;
    use notes_store::MemoryDocumentStore;

    fn handlers() -> NoteHandlers {
        NoteHandlers::new(
            NoteStore::new(Arc::new(MemoryDocumentStore::new())),
            ResponseBuilder::new(false),
        )
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let handlers = handlers();
        let envelope = handlers
            .create_note(CreateNoteRequest::with_body(
                r#"{"title":"Test Note","content":"Testing note creation"}"#,
            ))
            .await;
        assert_eq!(envelope.status_code, 201);

        let body = envelope.json_body().unwrap();
        let note_id = NoteId::from(body["noteId"].as_str().unwrap());
        let stored = handlers.notes().get(&note_id).await.unwrap().unwrap();
        assert_eq!(stored["title"], "Test Note");
        assert_eq!(stored["content"], "Testing note creation");

        let created_at = stored["createdAt"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
        assert!(created_at.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_create_missing_body() {
        let envelope = handlers().create_note(CreateNoteRequest::default()).await;
        assert_eq!(envelope.status_code, 400);
        assert_eq!(envelope.body, r#"{"error":"Request body is required"}"#);
    }

    #[tokio::test]
    async fn test_create_invalid_json() {
        let envelope = handlers()
            .create_note(CreateNoteRequest::with_body("{not json"))
            .await;
        assert_eq!(envelope.status_code, 400);
        assert_eq!(envelope.body, r#"{"error":"Invalid JSON in request body"}"#);
    }

    #[tokio::test]
    async fn test_create_from_bytes() {
        let handlers = handlers();

        let envelope = handlers.create_note_from_bytes(b"").await;
        assert_eq!(envelope.body, r#"{"error":"Request body is required"}"#);

        let envelope = handlers
            .create_note_from_bytes(b"{\"title\":\"Bad \xFF title\",\"content\":\"Some text\"}")
            .await;
        assert_eq!(envelope.status_code, 400);
        assert_eq!(envelope.body, r#"{"error":"Invalid JSON in request body"}"#);
        assert!(handlers.notes().list().await.unwrap().is_empty());

        let envelope = handlers
            .create_note_from_bytes(r#"{"title":"Café notes","content":"Crème brûlée"}"#.as_bytes())
            .await;
        assert_eq!(envelope.status_code, 201);
    }

    #[tokio::test]
    async fn test_get_empty_id_is_bad_request() {
        let envelope = handlers().get_note(NoteRequest::for_id("")).await;
        assert_eq!(envelope.status_code, 400);
        assert_eq!(envelope.body, r#"{"error":"Note ID is required"}"#);
    }

    #[test]
    fn test_panic_message() {
        let boxed: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(boxed.as_ref()), "boom");
        let boxed: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(boxed.as_ref()), "bang");
        let boxed: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(boxed.as_ref()), "panic");
    }
}
