//! Job analysis. Extracts six categories of information from a raw job description.

use crate::generation::language::Language;
use crate::generation::models::JobAnalysisResult;
use crate::generation::prompts::JOB_ANALYSIS_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{ContractError, LlmClient};

/// Extraction, not prose: keep sampling close to deterministic.
pub const JOB_ANALYSIS_TEMPERATURE: f32 = 0.2;

pub fn build_job_analysis_prompt(job_description: &str, language: Language) -> String {
    fill_template(
        JOB_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("language", language.display_name()),
            ("job_description", job_description),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

pub async fn analyze_job_description(
    llm: &LlmClient,
    job_description: &str,
    language: Language,
) -> Result<JobAnalysisResult, ContractError> {
    let prompt = build_job_analysis_prompt(job_description, language);
    llm.generate_structured(&prompt, JOB_ANALYSIS_TEMPERATURE)
        .await
}
