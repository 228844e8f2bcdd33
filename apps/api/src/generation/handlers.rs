//! Axum route handlers for the generation API.
//!
//! Handlers are the callers of the generation layer, so blank-input checks
//! live here rather than in the operations.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::cover_letter::generate_cover_letter;
use crate::generation::cv_analysis::analyze_cv_and_job;
use crate::generation::interview::{generate_interview_prep, get_feedback_on_answer};
use crate::generation::job_analysis::analyze_job_description;
use crate::generation::language::Language;
use crate::generation::models::{
    CandidateInfo, CoverLetterResult, CvAnalysisResult, InterviewFeedbackResult,
    InterviewPrepResult, JobAnalysisResult,
};
use crate::generation::tone::Tone;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeJobRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCvRequest {
    pub job_description: String,
    pub cv_text: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub job_description: String,
    pub cv_text: String,
    pub candidate: CandidateInfo,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewPrepRequest {
    pub job_description: String,
    #[serde(default)]
    pub cv_text: Option<String>,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub question: String,
    pub user_answer: String,
    #[serde(default)]
    pub language: Language,
}

fn require(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// POST /api/v1/jobs/analyze
///
/// Analyzes `jobDescription`, or fetches the posting at `url` first when the
/// description is blank.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeJobRequest>,
) -> Result<Json<JobAnalysisResult>, AppError> {
    let url = request.url.as_deref().map(str::trim).unwrap_or_default();

    let job_description = if !request.job_description.trim().is_empty() {
        request.job_description.trim().to_string()
    } else if !url.is_empty() {
        state.job_fetcher.fetch_description(url).await?
    } else {
        return Err(AppError::Validation(
            "jobDescription or url is required".to_string(),
        ));
    };

    info!("Analyzing job description ({} chars)", job_description.len());
    let result = analyze_job_description(&state.llm, &job_description, request.language).await?;
    Ok(Json(result))
}

/// POST /api/v1/cv/analyze
pub async fn handle_analyze_cv(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeCvRequest>,
) -> Result<Json<CvAnalysisResult>, AppError> {
    require(&request.job_description, "jobDescription")?;
    require(&request.cv_text, "cvText")?;

    let result = analyze_cv_and_job(
        &state.llm,
        &request.job_description,
        &request.cv_text,
        request.language,
    )
    .await?;
    if result.score != i64::from(result.clamped_score()) {
        info!("CV analysis score {} is outside 0-100", result.score);
    }
    Ok(Json(result))
}

/// POST /api/v1/cover-letters
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResult>, AppError> {
    require(&request.job_description, "jobDescription")?;
    require(&request.cv_text, "cvText")?;
    require(&request.candidate.full_name, "candidate.fullName")?;
    require(&request.candidate.experience, "candidate.experience")?;
    require(&request.candidate.objective, "candidate.objective")?;

    if !request.tone.is_known() {
        info!("Cover letter requested with custom tone '{}'", request.tone);
    }

    let result = generate_cover_letter(
        &state.llm,
        &request.job_description,
        &request.cv_text,
        &request.candidate,
        &request.tone,
        request.language,
    )
    .await?;
    Ok(Json(result))
}

/// POST /api/v1/interview/prep
pub async fn handle_interview_prep(
    State(state): State<AppState>,
    Json(request): Json<InterviewPrepRequest>,
) -> Result<Json<InterviewPrepResult>, AppError> {
    require(&request.job_description, "jobDescription")?;

    let result = generate_interview_prep(
        &state.llm,
        &request.job_description,
        request.cv_text.as_deref(),
        request.language,
    )
    .await?;
    Ok(Json(result))
}

/// POST /api/v1/interview/feedback
pub async fn handle_interview_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<InterviewFeedbackResult>, AppError> {
    require(&request.question, "question")?;
    require(&request.user_answer, "userAnswer")?;

    let result = get_feedback_on_answer(
        &state.llm,
        &request.question,
        &request.user_answer,
        request.language,
    )
    .await?;
    Ok(Json(result))
}
