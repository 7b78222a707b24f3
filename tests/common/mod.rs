//! Shared test helpers and mock provider.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use codesmith::error::CodesmithError;
use codesmith::provider::{
    FinishReason, GenerationOutput, GenerationProvider, GenerationRequest, TokenUsage,
};

/// A mock provider that returns canned outcomes and records every request.
///
/// Clones share the same queue and request log, so a test can keep a handle
/// while the generator owns a boxed copy.
#[derive(Clone)]
pub struct MockProvider {
    model_id: String,
    outcomes: Arc<Mutex<Vec<Result<GenerationOutput, CodesmithError>>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
    delay: Option<Duration>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            model_id: "mock-model".to_string(),
            outcomes: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Sleep before answering each call, for exercising timeouts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a successful text response.
    pub fn queue_text(&self, text: &str) {
        self.outcomes.lock().unwrap().push(Ok(GenerationOutput {
            text: text.to_string(),
            usage: TokenUsage {
                input_tokens: 10,
                output_tokens: 20,
                total_tokens: 30,
            },
            finish_reason: Some(FinishReason::Stop),
        }));
    }

    /// Queue a failure outcome.
    pub fn queue_failure(&self, error: CodesmithError) {
        self.outcomes.lock().unwrap().push(Err(error));
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutput, CodesmithError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.requests.lock().unwrap().push(request.clone());
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Ok(GenerationOutput {
                text: "Mock response".to_string(),
                usage: TokenUsage::default(),
                finish_reason: Some(FinishReason::Stop),
            });
        }
        outcomes.remove(0)
    }
}
