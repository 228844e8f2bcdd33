use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{GenerationRequest, LlmClient, LlmError, TextGenerator};

enum Outcome {
    Text(Option<String>),
    Fail(Box<dyn Fn() -> LlmError + Send + Sync>),
}

/// A deterministic upstream for tests. Replays the same outcome on every call
/// and records each request it received.
pub struct ScriptedGenerator {
    outcome: Outcome,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Self {
        Self::with(Outcome::Text(Some(text.to_string())))
    }

    pub fn empty() -> Self {
        Self::with(Outcome::Text(None))
    }

    pub fn failing<F>(make_error: F) -> Self
    where
        F: Fn() -> LlmError + Send + Sync + 'static,
    {
        Self::with(Outcome::Fail(Box::new(make_error)))
    }

    fn with(outcome: Outcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Prompt of the most recent call.
    pub fn last_prompt(&self) -> String {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map(|r| r.prompt.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<Option<String>, LlmError> {
        self.requests.lock().unwrap().push(request);
        match &self.outcome {
            Outcome::Text(text) => Ok(text.clone()),
            Outcome::Fail(make_error) => Err(make_error()),
        }
    }
}

/// Wraps `generator` in an `LlmClient`, keeping a handle for inspecting requests.
pub fn scripted_client(generator: ScriptedGenerator) -> (LlmClient, Arc<ScriptedGenerator>) {
    let generator = Arc::new(generator);
    (LlmClient::new(generator.clone()), generator)
}
