//! Google Gemini API provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CodesmithError, Result};
use crate::models::GeminiModel;

use super::http::{shared_client, status_to_error};
use super::{FinishReason, GenerationOutput, GenerationProvider, GenerationRequest, TokenUsage};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GoogleProvider {
    model: GeminiModel,
    api_key: String,
    base_url: String,
}

impl GoogleProvider {
    pub fn new(model: GeminiModel, api_key: String) -> Self {
        Self {
            model,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different endpoint, e.g. a proxy or a
    /// mock server in tests. Trailing slashes are stripped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn build_request_body(&self, request: &GenerationRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": request.prompt}],
            }]
        });
        let obj = body.as_object_mut().expect("body is an object");

        let mut gen_config = serde_json::Map::new();
        if let Some(temp) = request.settings.temperature {
            gen_config.insert("temperature".into(), temp.into());
        }
        if let Some(max) = request.settings.max_tokens {
            gen_config.insert("maxOutputTokens".into(), max.into());
        }
        if let Some(top_p) = request.settings.top_p {
            gen_config.insert("topP".into(), top_p.into());
        }
        if !gen_config.is_empty() {
            obj.insert(
                "generationConfig".into(),
                serde_json::Value::Object(gen_config),
            );
        }

        body
    }
}

#[async_trait]
impl GenerationProvider for GoogleProvider {
    fn name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        self.model.as_str()
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput> {
        let body = self.build_request_body(request);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model.as_str(),
            self.api_key
        );

        debug!(model = self.model.as_str(), "Google generate");

        let resp = shared_client().post(&url).json(&body).send().await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: GeminiResponse = resp.json().await?;

        let candidate = data
            .candidates
            .into_iter()
            .next()
            .ok_or(CodesmithError::EmptyResponse)?;

        let mut text = String::new();
        for part in candidate.content.parts {
            if let Some(t) = part.text {
                text.push_str(&t);
            }
        }
        if text.trim().is_empty() {
            return Err(CodesmithError::EmptyResponse);
        }

        let finish_reason = candidate.finish_reason.map(|reason| match reason.as_str() {
            "STOP" => FinishReason::Stop,
            "MAX_TOKENS" => FinishReason::Length,
            "SAFETY" => FinishReason::ContentFilter,
            _ => FinishReason::Other(reason),
        });

        let usage = data
            .usage_metadata
            .map(|u| TokenUsage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            })
            .unwrap_or_default();

        Ok(GenerationOutput {
            text,
            usage,
            finish_reason,
        })
    }
}

// Internal Gemini response types

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    // Safety-blocked candidates arrive without content.
    #[serde(default)]
    content: GeminiContent,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Default)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModelSettings;

    fn provider() -> GoogleProvider {
        GoogleProvider::new(GeminiModel::Gemini20FlashExp, "test-key".into())
    }

    #[test]
    fn request_body_carries_prompt_and_generation_config() {
        let request = GenerationRequest::new("write a function", ModelSettings::default());
        let body = provider().build_request_body(&request);

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "write a function");
        assert_eq!(body["generationConfig"]["temperature"], 0.7);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
        assert!(body["generationConfig"].get("topP").is_none());
    }

    #[test]
    fn generation_config_omitted_when_all_settings_unset() {
        let settings = ModelSettings {
            temperature: None,
            max_tokens: None,
            top_p: None,
            ..ModelSettings::default()
        };
        let body = provider().build_request_body(&GenerationRequest::new("x", settings));
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn base_url_override_strips_trailing_slash() {
        let provider = provider().with_base_url("http://localhost:9090/");
        assert_eq!(provider.base_url, "http://localhost:9090");
    }

    #[test]
    fn response_parses_with_missing_content() {
        let raw = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let parsed: GeminiResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.candidates[0].content.parts.is_empty());
        assert_eq!(parsed.candidates[0].finish_reason.as_deref(), Some("SAFETY"));
    }
}
