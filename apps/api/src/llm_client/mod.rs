/// LLM Client: the single point of entry for all model calls in PrepMyJob.
///
/// ARCHITECTURAL RULE: No other module may talk to the upstream model directly.
/// Operations build a prompt, pick a temperature, and call `generate_structured`;
/// this module owns the transport and the mapping of every failure onto `ContractError`.
///
/// There is no process-wide client. `LlmClient` is constructed once at startup
/// and handed to whoever needs it, which is also how tests substitute the upstream.
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error, warn};

pub mod gemini;
#[cfg(test)]
pub mod mock;
pub mod prompts;
pub mod schema;

pub use gemini::GeminiGenerator;
pub use schema::{Schema, StructuredOutput};

/// Transport-level failures. Never leaves this module unmapped.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Upstream rejected credentials: {0}")]
    Unauthorized(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Could not decode upstream envelope: {0}")]
    Decode(String),
}

/// The error taxonomy callers see. Every failure of an operation is exactly one of these.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("invalid upstream credentials")]
    InvalidCredentials,

    #[error("upstream returned no content")]
    EmptyResponse,

    #[error("upstream content did not match the expected shape: {0}")]
    MalformedResponse(String),

    #[error("upstream service failure: {0}")]
    Service(String),
}

impl ContractError {
    /// Stable key the front end uses to pick a translated message.
    pub fn code(&self) -> &'static str {
        match self {
            ContractError::InvalidCredentials => "INVALID_CREDENTIALS",
            ContractError::EmptyResponse => "EMPTY_RESPONSE",
            ContractError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            ContractError::Service(_) => "SERVICE_ERROR",
        }
    }

    /// Message safe to show an end user. Never includes upstream detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            ContractError::InvalidCredentials => {
                "Your API key is invalid. Please check your configuration."
            }
            ContractError::EmptyResponse => "Received an empty response from the AI.",
            ContractError::MalformedResponse(_) => {
                "The AI returned data in an unexpected format. Please try again."
            }
            ContractError::Service(_) => {
                "An error occurred while communicating with the AI. \
                 Please check the job description and try again."
            }
        }
    }
}

impl From<LlmError> for ContractError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Unauthorized(_) => ContractError::InvalidCredentials,
            other => ContractError::Service(other.to_string()),
        }
    }
}

/// One call against the upstream: prompt, expected shape, sampling temperature.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub schema: Schema,
    pub temperature: f32,
}

/// The upstream text-generation seam.
///
/// `Ok(None)` means the upstream answered but produced no text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<Option<String>, LlmError>;
}

/// Handle used by every operation. Cheap to clone.
#[derive(Clone)]
pub struct LlmClient {
    generator: Arc<dyn TextGenerator>,
}

impl LlmClient {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Sends `prompt` with `T`'s schema and parses the answer into `T`.
    ///
    /// No retries: a failed call is reported once and the caller decides what to do.
    pub async fn generate_structured<T: StructuredOutput>(
        &self,
        prompt: &str,
        temperature: f32,
    ) -> Result<T, ContractError> {
        let request = GenerationRequest {
            prompt: prompt.to_string(),
            schema: T::schema(),
            temperature,
        };

        let text = match self.generator.generate(request).await {
            Ok(text) => text,
            Err(LlmError::Unauthorized(message)) => {
                error!("LLM credentials rejected: {message}");
                return Err(ContractError::InvalidCredentials);
            }
            Err(e) => {
                warn!("LLM call failed: {e}");
                return Err(e.into());
            }
        };

        let text = match text.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => {
                warn!("LLM returned empty content");
                return Err(ContractError::EmptyResponse);
            }
        };

        let json = strip_json_fences(text);
        match serde_json::from_str::<T>(json) {
            Ok(value) => {
                debug!(
                    "LLM call succeeded: temperature={temperature}, response_chars={}",
                    text.len()
                );
                Ok(value)
            }
            Err(e) => {
                warn!("LLM returned malformed JSON: {e}");
                debug!("Malformed LLM payload: {text}");
                Err(ContractError::MalformedResponse(e.to_string()))
            }
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
