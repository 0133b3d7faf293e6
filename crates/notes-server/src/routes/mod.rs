//! Route definitions for the HTTP host.

pub mod health;
pub mod notes;

use axum::{Router, http::StatusCode, middleware};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::request_id::{propagate_request_id, request_id_layer};
use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(notes::routes())
        .with_state(state)
}

/// Build the router wrapped in the middleware stack.
///
/// The request timeout answers 500 so it reads like any other server
/// failure. It should stay above the store's per-call timeout, which fails
/// with a proper `{error}` envelope first.
pub fn build_app(state: AppState) -> Router {
    let timeout = state.config().request_timeout;
    let cors_enabled = state.config().cors_enabled;

    let app = build_router(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::INTERNAL_SERVER_ERROR,
            timeout,
        ))
        .layer(middleware::from_fn(propagate_request_id))
        .layer(request_id_layer());

    let app = if cors_enabled {
        app.layer(build_cors_layer())
    } else {
        app
    };

    app.layer(TraceLayer::new_for_http())
}

/// Any origin, method and header; no credentials.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
