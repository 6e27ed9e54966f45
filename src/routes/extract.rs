//! Text extraction endpoint
//!
//! `POST /extract-text` takes a multipart form with a `file` field and
//! answers with either `{"text": ...}` or `{"error": ...}`.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::error::{AppError, ErrorResponse, Result};
use crate::pdf::ExtractError;
use crate::state::AppState;

/// Prefix of every extraction failure message
pub const FAILURE_PREFIX: &str = "Failed to process PDF";

/// Multipart field carrying the document
const FILE_FIELD: &str = "file";

/// Create the extraction router
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(extract_text))
}

/// Outcome of one extraction request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Text(String),
    Failure(String),
}

#[derive(Serialize)]
pub struct TextResponse {
    pub text: String,
}

impl From<std::result::Result<String, ExtractError>> for ExtractionResult {
    fn from(result: std::result::Result<String, ExtractError>) -> Self {
        match result {
            Ok(text) => ExtractionResult::Text(text),
            Err(e) => ExtractionResult::Failure(format!("{}: {}", FAILURE_PREFIX, e)),
        }
    }
}

impl IntoResponse for ExtractionResult {
    fn into_response(self) -> Response {
        match self {
            ExtractionResult::Text(text) => Json(TextResponse { text }).into_response(),
            ExtractionResult::Failure(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(error))).into_response()
            }
        }
    }
}

/// A document received in a multipart upload
#[derive(Debug)]
pub struct UploadedDocument {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Extract the plain text of an uploaded PDF
async fn extract_text(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<ExtractionResult> {
    let multipart = multipart.map_err(|e| AppError::Upload(e.body_text()))?;
    let upload = read_upload(multipart).await?;

    tracing::debug!(
        "Extracting text: filename={:?}, content_type={:?}, {} bytes",
        upload.filename,
        upload.content_type,
        upload.data.len()
    );

    let result = state.text_service().extract_text(upload.data).await;
    match &result {
        Ok(text) => tracing::debug!("Extracted {} characters", text.chars().count()),
        Err(e) => tracing::warn!("{}: {}", FAILURE_PREFIX, e),
    }

    Ok(result.into())
}

/// Pull the `file` field out of the form, skipping any other fields
async fn read_upload(mut multipart: Multipart) -> Result<UploadedDocument> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.body_text()))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name != FILE_FIELD {
            tracing::debug!("Skipping multipart field '{}'", name);
            continue;
        }

        let filename = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Upload(e.body_text()))?
            .to_vec();

        return Ok(UploadedDocument {
            filename,
            content_type,
            data,
        });
    }

    Err(AppError::MissingFile)
}
