use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::documents::ExtractError;
use crate::job_posting::JobFetchError;
use crate::llm_client::ContractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The `code` in the response body is stable and is what the front end keys
/// its translated messages on.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] ContractError),

    #[error("Document error: {0}")]
    Document(#[from] ExtractError),

    #[error("Job posting error: {0}")]
    JobFetch(#[from] JobFetchError),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(e) => {
                let status = match e {
                    ContractError::Service(_) => StatusCode::SERVICE_UNAVAILABLE,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, e.code(), e.user_message().to_string())
            }
            AppError::Document(e) => match e {
                ExtractError::UnsupportedType(_) => (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    "UNSUPPORTED_FILE",
                    "Unsupported file type. Please upload a PDF or DOCX file.".to_string(),
                ),
                ExtractError::TooLarge { .. } => (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "FILE_TOO_LARGE",
                    "File is too large. The maximum size is 5 MB.".to_string(),
                ),
                ExtractError::Corrupt { kind, .. } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "CORRUPT_FILE",
                    format!("The {} file could not be read.", kind.to_uppercase()),
                ),
                ExtractError::Processing(_) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "FILE_PROCESSING_ERROR",
                    "An error occurred while processing the file.".to_string(),
                ),
            },
            AppError::JobFetch(e) => match e {
                JobFetchError::InvalidUrl(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                JobFetchError::ForbiddenHost(_) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "This URL cannot be fetched.".to_string(),
                ),
                _ => (
                    StatusCode::BAD_GATEWAY,
                    "JOB_FETCH_FAILED",
                    "Could not retrieve a job description from that link.".to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!("{code}: {self}");
        } else {
            tracing::warn!("{code}: {self}");
        }

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
