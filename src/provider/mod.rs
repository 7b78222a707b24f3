//! Generation provider trait and implementations.

pub mod http;

#[cfg(feature = "google")]
pub mod google;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::CodesmithConfig;
use crate::error::{CodesmithError, Result};
use crate::models::GeminiModel;
use crate::types::ModelSettings;

/// A single-turn request sent to a provider.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Fully assembled prompt text; see [`crate::prompt`].
    pub prompt: String,
    pub settings: ModelSettings,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, settings: ModelSettings) -> Self {
        Self {
            prompt: prompt.into(),
            settings,
        }
    }
}

/// Token accounting reported by the provider, zero when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

/// Why the model stopped emitting tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// Natural end of output.
    Stop,
    /// Hit the max output token limit; the code is likely truncated.
    Length,
    /// Output was blocked by the provider's safety filters.
    ContentFilter,
    /// Provider-specific reason, preserved verbatim.
    Other(String),
}

/// Response from a provider. `text` is never empty; providers map an
/// empty completion to [`CodesmithError::EmptyResponse`] instead.
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    pub text: String,
    pub usage: TokenUsage,
    pub finish_reason: Option<FinishReason>,
}

/// Core trait implemented by all generation providers.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Provider name (e.g., "google").
    fn name(&self) -> &str;
    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Run one generation request to completion.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput>;
}

/// Create a provider for the given model, using the provided config.
#[allow(unused_variables)]
pub fn create_provider(
    model: GeminiModel,
    config: &CodesmithConfig,
) -> Result<Box<dyn GenerationProvider>> {
    #[cfg(feature = "google")]
    {
        let api_key = config
            .api_key()
            .ok_or_else(|| CodesmithError::Authentication("Missing GOOGLE_API_KEY".into()))?;
        let mut provider = google::GoogleProvider::new(model, api_key.to_string());
        if let Some(base_url) = config.base_url() {
            provider = provider.with_base_url(base_url);
        }
        Ok(Box::new(provider))
    }
    #[cfg(not(feature = "google"))]
    Err(CodesmithError::Configuration(
        "No provider enabled via feature flags".into(),
    ))
}
