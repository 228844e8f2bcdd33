use std::sync::Arc;

use crate::job_posting::JobPostingSource;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Nothing here is mutable; each request builds its own prompt and upstream call.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable posting source. Default: `JobPostingFetcher` (live HTTP).
    pub job_fetcher: Arc<dyn JobPostingSource>,
}
