//! notes-store: Storage layer for the notes backend
//!
//! This crate provides:
//! - The `DocumentStore` trait, the put/get/scan/delete contract of the
//!   underlying key-value store
//! - `MemoryDocumentStore`, a process-local store for development and tests
//! - `PgDocumentStore`, a PostgreSQL-backed store using a JSONB table
//! - `NoteStore`, the adapter that maps note operations onto a document store
//!   and folds every backend failure into one "storage unavailable" error
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use notes_store::{NoteStore, PgDocumentStore, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let documents = PgDocumentStore::connect(config).await?;
//! let notes = NoteStore::new(Arc::new(documents));
//!
//! notes.create(&note).await?;
//! let item = notes.get(&note.note_id).await?;
//! ```

pub mod document;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;
pub mod schema;

pub use document::{DocumentStore, Item};
pub use error::{NoteStoreError, NoteStoreResult, StoreError, StoreResult};
pub use memory::MemoryDocumentStore;
pub use postgres::{PgDocumentStore, StoreConfig};
pub use repository::NoteStore;

// Re-export notes-core for downstream crates
pub use notes_core;
