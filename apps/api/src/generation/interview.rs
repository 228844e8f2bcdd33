//! Interview preparation: tailored question/answer pairs, and feedback on a
//! candidate's own answer to one of them.

use crate::generation::language::Language;
use crate::generation::models::{InterviewFeedbackResult, InterviewPrepResult};
use crate::generation::prompts::{
    FEEDBACK_PROMPT_TEMPLATE, INTERVIEW_PREP_CV_CONTEXT_TEMPLATE, INTERVIEW_PREP_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{ContractError, LlmClient};

pub const INTERVIEW_PREP_TEMPERATURE: f32 = 0.5;
pub const FEEDBACK_TEMPERATURE: f32 = 0.4;

/// A CV block is only added when `cv_text` is present and not blank.
pub fn build_interview_prep_prompt(
    job_description: &str,
    cv_text: Option<&str>,
    language: Language,
) -> String {
    let cv_context = cv_text
        .filter(|cv| !cv.trim().is_empty())
        .map(|cv| fill_template(INTERVIEW_PREP_CV_CONTEXT_TEMPLATE, &[("cv_text", cv)]))
        .unwrap_or_default();

    fill_template(
        INTERVIEW_PREP_PROMPT_TEMPLATE,
        &[
            ("language", language.display_name()),
            ("cv_context", cv_context.as_str()),
            ("job_description", job_description),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

pub fn build_feedback_prompt(question: &str, user_answer: &str, language: Language) -> String {
    fill_template(
        FEEDBACK_PROMPT_TEMPLATE,
        &[
            ("language", language.display_name()),
            ("question", question),
            ("user_answer", user_answer),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// The model is asked for 5–7 questions; the count it returns is not checked.
pub async fn generate_interview_prep(
    llm: &LlmClient,
    job_description: &str,
    cv_text: Option<&str>,
    language: Language,
) -> Result<InterviewPrepResult, ContractError> {
    let prompt = build_interview_prep_prompt(job_description, cv_text, language);
    llm.generate_structured(&prompt, INTERVIEW_PREP_TEMPERATURE)
        .await
}

/// An empty `user_answer` is still sent; callers decide whether to allow it.
pub async fn get_feedback_on_answer(
    llm: &LlmClient,
    question: &str,
    user_answer: &str,
    language: Language,
) -> Result<InterviewFeedbackResult, ContractError> {
    let prompt = build_feedback_prompt(question, user_answer, language);
    llm.generate_structured(&prompt, FEEDBACK_TEMPERATURE)
        .await
}
