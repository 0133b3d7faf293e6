//! Liveness endpoint for the host.
//!
//! Reports process liveness only; it does not touch the document store.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::config::StoreBackend;
use crate::state::AppState;

/// Liveness body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Configured document store backend.
    pub store: &'static str,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = match state.config().store_backend {
        StoreBackend::Memory => "memory",
        StoreBackend::Postgres => "postgres",
    };
    Json(HealthResponse {
        status: "ok",
        store,
    })
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
