//! Application state shared across routes.

use std::sync::Arc;

use notes_store::{DocumentStore, NoteStore};

use crate::config::ServerConfig;
use crate::envelope::ResponseBuilder;
use crate::handlers::NoteHandlers;

/// Application state shared across all routes.
///
/// This is cloneable and can be extracted in routes using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Note handlers with their store, id generator and response builder.
    handlers: Arc<NoteHandlers>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state over a document store.
    pub fn new(documents: Arc<dyn DocumentStore>, config: ServerConfig) -> Self {
        let handlers = NoteHandlers::new(
            NoteStore::new(documents),
            ResponseBuilder::new(config.cors_enabled),
        );
        Self {
            handlers: Arc::new(handlers),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the note handlers.
    pub fn handlers(&self) -> &NoteHandlers {
        &self.handlers
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
