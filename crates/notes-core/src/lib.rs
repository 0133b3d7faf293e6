//! notes-core: Core types for the notes backend
//!
//! This crate provides:
//! - The `Note` entity and its `NoteId`
//! - `NoteDraft`, a validated create payload
//! - The note validator (`validate_note`)
//!
//! # Usage
//!
//! ```
//! use notes_core::{validate_note, Note, NoteId};
//! use serde_json::json;
//!
//! let draft = validate_note(&json!({ "title": "Groceries", "content": "Milk and eggs" })).unwrap();
//! let note = Note::from_draft(NoteId::from("1700000000000"), draft, "2023-11-14T22:13:20.000Z");
//! assert_eq!(note.title, "Groceries");
//! ```

pub mod types;
pub mod validation;

pub use types::{Note, NoteDraft, NoteId, format_timestamp};
pub use validation::{
    CONTENT_MIN_LEN, Rule, TITLE_MAX_LEN, TITLE_MIN_LEN, Violation, validate_note,
};
