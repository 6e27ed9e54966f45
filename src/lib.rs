//! PDF Text Server
//!
//! Accepts an uploaded PDF and returns its plain text as JSON. PDF parsing is
//! delegated to MuPDF; this crate provides the HTTP surface, cross-origin
//! policy and error mapping around it.

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod cors;
pub mod error;
pub mod pdf;
pub mod routes;
pub mod state;

pub use config::Config;
pub use state::AppState;

/// Build the application router with all middleware attached
pub fn app(state: AppState) -> Router {
    let body_limit = match state.config().extraction.max_upload_bytes {
        Some(max) => DefaultBodyLimit::max(max),
        None => DefaultBodyLimit::disable(),
    };
    let cors = cors::cors_layer(&state.config().cors);

    Router::new()
        .nest("/health", routes::health::router())
        .nest("/extract-text", routes::extract::router())
        .nest("/api/extract-text", routes::extract::router())
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
