use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::documents::{extract_text, ExtractError, MAX_UPLOAD_BYTES};
use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
}

/// The route's body limit surfaces as a multipart error mid-stream.
fn upload_error(err: MultipartError, context: &str) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ExtractError::TooLarge {
            limit: MAX_UPLOAD_BYTES,
        }
        .into();
    }
    AppError::Validation(format!("{context}: {}", err.body_text()))
}

/// POST /api/v1/cv/extract
///
/// Multipart upload with a single `file` field (PDF or DOCX, at most 5 MB).
pub async fn handle_extract_cv(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e, "Invalid multipart body"))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| upload_error(e, "Could not read upload"))?;

        info!(
            "Extracting CV text: name={:?}, type={:?}, bytes={}",
            file_name,
            content_type,
            bytes.len()
        );

        let text = tokio::task::spawn_blocking(move || {
            extract_text(&bytes, content_type.as_deref(), file_name.as_deref())
        })
        .await
        .map_err(|e| ExtractError::Processing(e.to_string()))??;

        return Ok(Json(ExtractResponse { text }));
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}
