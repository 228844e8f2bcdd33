//! CV analysis: compatibility score, summary, keyword coverage and recommendations
//! for a CV measured against a job description.
//!
//! The score is returned exactly as the model produced it. Bounding it to 0–100
//! is a display concern; see `CvAnalysisResult::clamped_score`.

use crate::generation::language::Language;
use crate::generation::models::CvAnalysisResult;
use crate::generation::prompts::CV_ANALYSIS_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{ContractError, LlmClient};

pub const CV_ANALYSIS_TEMPERATURE: f32 = 0.3;

pub fn build_cv_analysis_prompt(job_description: &str, cv_text: &str, language: Language) -> String {
    fill_template(
        CV_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("language", language.display_name()),
            ("job_description", job_description),
            ("cv_text", cv_text),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

pub async fn analyze_cv_and_job(
    llm: &LlmClient,
    job_description: &str,
    cv_text: &str,
    language: Language,
) -> Result<CvAnalysisResult, ContractError> {
    let prompt = build_cv_analysis_prompt(job_description, cv_text, language);
    llm.generate_structured(&prompt, CV_ANALYSIS_TEMPERATURE)
        .await
}
