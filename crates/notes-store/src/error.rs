//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for document store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for note store (adapter) operations.
pub type NoteStoreResult<T> = Result<T, NoteStoreError>;

/// Errors raised by a document store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error (connection, query, pool exhaustion).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A store call did not complete within the configured timeout.
    #[error("store call timed out after {0} ms")]
    Timeout(u64),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Any other backend failure.
    #[error("backend error: {0}")]
    Backend(String),
}

/// The single failure condition of the note store adapter.
///
/// Backend failures are not distinguished by kind at this layer. The cause is
/// kept for logging only and never reaches callers.
#[derive(Debug, Error)]
pub enum NoteStoreError {
    /// The document store could not complete the operation.
    #[error("storage unavailable during {operation}: {source}")]
    Unavailable {
        /// The adapter operation that failed (`create`, `get`, `list`, `delete`).
        operation: &'static str,
        /// The underlying backend failure.
        #[source]
        source: StoreError,
    },
}

impl NoteStoreError {
    pub(crate) fn unavailable(operation: &'static str, source: impl Into<StoreError>) -> Self {
        Self::Unavailable {
            operation,
            source: source.into(),
        }
    }

    /// The adapter operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Unavailable { operation, .. } => operation,
        }
    }
}
