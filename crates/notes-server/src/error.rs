//! Handler error types and their envelope mapping.

use axum::http::StatusCode;
use notes_core::Violation;
use notes_store::NoteStoreError;

use crate::envelope::{Envelope, ResponseBuilder};

/// Generic message for every server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Every way a handler invocation can end without success.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// Create was invoked without a body (400).
    #[error("Request body is required")]
    MissingBody,

    /// The body is not valid JSON (400).
    #[error("Invalid JSON in request body")]
    InvalidJson(#[source] serde_json::Error),

    /// The body is not UTF-8, so it cannot be JSON either (400).
    #[error("Invalid JSON in request body")]
    InvalidEncoding(#[source] std::str::Utf8Error),

    /// The path carries no note id (400).
    #[error("Note ID is required")]
    MissingNoteId,

    /// The payload failed validation (400).
    #[error(transparent)]
    Validation(#[from] Violation),

    /// No note has the requested id (404).
    #[error("Note not found")]
    NotFound,

    /// The note store failed (500).
    #[error("storage error: {0}")]
    Storage(#[from] NoteStoreError),

    /// A failure nobody anticipated, such as a panic (500).
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl HandlerError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingBody
            | Self::InvalidJson(_)
            | Self::InvalidEncoding(_)
            | Self::MissingNoteId
            | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the caller.
    ///
    /// Client errors are precise; server errors never leak internal detail.
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    /// Render as an `{error}` envelope.
    pub fn into_envelope(self, responses: &ResponseBuilder) -> Envelope {
        responses.error(self.status_code(), &self.public_message())
    }
}
