//! Cover letter generation.

use crate::generation::language::Language;
use crate::generation::models::{CandidateInfo, CoverLetterResult};
use crate::generation::prompts::{COVER_LETTER_PROMPT_TEMPLATE, STRENGTHS_NOT_PROVIDED};
use crate::generation::tone::Tone;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{ContractError, LlmClient};

/// Prose benefits from variety between drafts.
pub const COVER_LETTER_TEMPERATURE: f32 = 0.7;

pub fn build_cover_letter_prompt(
    job_description: &str,
    cv_text: &str,
    candidate: &CandidateInfo,
    tone: &Tone,
    language: Language,
) -> String {
    let strengths = candidate
        .strengths
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(STRENGTHS_NOT_PROVIDED);

    fill_template(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("language", language.display_name()),
            ("tone", tone.as_str()),
            ("job_description", job_description),
            ("cv_text", cv_text),
            ("full_name", candidate.full_name.as_str()),
            ("experience", candidate.experience.as_str()),
            ("objective", candidate.objective.as_str()),
            ("strengths", strengths),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

pub async fn generate_cover_letter(
    llm: &LlmClient,
    job_description: &str,
    cv_text: &str,
    candidate: &CandidateInfo,
    tone: &Tone,
    language: Language,
) -> Result<CoverLetterResult, ContractError> {
    let prompt = build_cover_letter_prompt(job_description, cv_text, candidate, tone, language);
    llm.generate_structured(&prompt, COVER_LETTER_TEMPERATURE)
        .await
}
