//! Health check endpoint
//!
//! Reports the running version plus the extraction settings the service was
//! started with, so an operator can confirm which engine and limits are live.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
    pub engine: &'static str,
    pub extract_timeout_secs: Option<u64>,
    pub max_upload_bytes: Option<usize>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let extraction = &state.config().extraction;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "pdf-text-server",
        engine: state.text_service().engine(),
        extract_timeout_secs: extraction.timeout_secs,
        max_upload_bytes: extraction.max_upload_bytes,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}
