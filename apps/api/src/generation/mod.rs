// Generation operations: job analysis, CV analysis, cover letters, interview prep and feedback.
// Every operation is one prompt, one temperature and one typed result.
// All LLM calls go through llm_client; no direct upstream calls here.

pub mod cover_letter;
pub mod cv_analysis;
pub mod handlers;
pub mod interview;
pub mod job_analysis;
pub mod language;
pub mod models;
pub mod prompts;
pub mod tone;
