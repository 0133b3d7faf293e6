//! notes-server: Request handlers and HTTP host for the notes backend
//!
//! This crate provides:
//! - Request envelopes for the create, get, list and delete invocations
//! - The four stateless request handlers (`NoteHandlers`)
//! - The response builder producing the uniform `{statusCode, headers, body}`
//!   envelope
//! - An Axum host that maps HTTP routes onto the handlers
//!
//! # Architecture
//!
//! Every handler runs the same single pass: parse the request envelope,
//! validate (create only), call the note store, build the response envelope.
//! Handlers never call each other and keep no state between invocations
//! beyond the injected store, id generator and response builder.
//!
//! The HTTP host adds a middleware stack for:
//! - Request tracing and logging
//! - Request ID generation
//! - Request timeouts
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use notes_server::{NoteHandlers, ResponseBuilder, CreateNoteRequest};
//! use notes_store::{MemoryDocumentStore, NoteStore};
//!
//! let handlers = NoteHandlers::new(
//!     NoteStore::new(Arc::new(MemoryDocumentStore::new())),
//!     ResponseBuilder::new(true),
//! );
//! let envelope = handlers
//!     .create_note(CreateNoteRequest::with_body(r#"{"title":"Hi there","content":"Hello!"}"#))
//!     .await;
//! assert_eq!(envelope.status_code, 201);
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod ids;
pub mod middleware;
pub mod request;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, LogFormat, ServerConfig, StoreBackend};
pub use envelope::{Envelope, ResponseBuilder};
pub use error::HandlerError;
pub use handlers::NoteHandlers;
pub use ids::NoteIdGenerator;
pub use request::{CreateNoteRequest, NoteRequest, PathParameters};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;
