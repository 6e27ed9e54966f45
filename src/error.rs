//! Request-level error types for the PDF text server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Problems with the upload itself, before any PDF work starts
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No file provided. Use field name 'file'")]
    MissingFile,

    #[error("Failed to read upload: {0}")]
    Upload(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingFile | AppError::Upload(_) => StatusCode::BAD_REQUEST,
        };

        tracing::warn!("Rejected upload: {}", self);
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
