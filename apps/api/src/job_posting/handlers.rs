use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractUrlRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractUrlResponse {
    pub job_description: String,
}

/// POST /api/v1/jobs/extract-url
pub async fn handle_extract_url(
    State(state): State<AppState>,
    Json(request): Json<ExtractUrlRequest>,
) -> Result<Json<ExtractUrlResponse>, AppError> {
    if request.url.trim().is_empty() {
        return Err(AppError::Validation("url cannot be empty".to_string()));
    }

    let job_description = state.job_fetcher.fetch_description(&request.url).await?;
    Ok(Json(ExtractUrlResponse { job_description }))
}
