//! Note routes.
//!
//! These routes stand in for the function host: each one turns the HTTP
//! request into the handler's request envelope and returns the handler's
//! envelope as the response, status, headers and body unchanged.
//!
//! - POST /notes - Create a note
//! - GET /notes - List all notes
//! - GET /notes/{id} - Get one note
//! - DELETE /notes/{id} - Delete a note

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    routing::get,
};

use crate::envelope::Envelope;
use crate::request::NoteRequest;
use crate::state::AppState;

/// POST /notes
async fn create_note(State(state): State<AppState>, body: Bytes) -> Envelope {
    state.handlers().create_note_from_bytes(&body).await
}

/// GET /notes
async fn list_notes(State(state): State<AppState>) -> Envelope {
    state.handlers().list_notes().await
}

/// GET /notes/{id}
async fn get_note(State(state): State<AppState>, Path(id): Path<String>) -> Envelope {
    state.handlers().get_note(NoteRequest::for_id(id)).await
}

/// DELETE /notes/{id}
async fn delete_note(State(state): State<AppState>, Path(id): Path<String>) -> Envelope {
    state.handlers().delete_note(NoteRequest::for_id(id)).await
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", get(get_note).delete(delete_note))
}
