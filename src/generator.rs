//! The code generation service.
//!
//! [`CodeGenerator`] ties the pieces together: it renders the prompt
//! from the configured options, calls the provider, and commits the
//! result to session history through the request ticket protocol. A
//! failed or superseded generation leaves history exactly as it was.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{CodesmithError, Result};
use crate::prompt;
use crate::provider::{GenerationProvider, GenerationRequest};
use crate::session::SessionContext;
use crate::types::{GenerationOptions, HistoryRecord};
use crate::util::with_timeout;

pub struct CodeGenerator {
    provider: Box<dyn GenerationProvider>,
    session: SessionContext,
    options: GenerationOptions,
}

impl CodeGenerator {
    /// Generator with default options and a fresh session.
    pub fn new(provider: Box<dyn GenerationProvider>) -> Self {
        Self::with_options(provider, GenerationOptions::default())
    }

    pub fn with_options(provider: Box<dyn GenerationProvider>, options: GenerationOptions) -> Self {
        Self {
            provider,
            session: SessionContext::new(),
            options,
        }
    }

    /// Generate code for `description` and record it in history.
    ///
    /// The record is appended only when the provider call succeeds and
    /// the request has not been canceled or superseded in the meantime;
    /// any error leaves the session untouched. The returned record is
    /// the same one history now holds.
    pub async fn generate(&mut self, description: &str) -> Result<HistoryRecord> {
        if description.trim().is_empty() {
            return Err(CodesmithError::InvalidArgument(
                "describe what code you want to generate".into(),
            ));
        }

        let ticket = self.session.begin_request();
        let full_prompt = prompt::build_prompt(description, &self.options);
        let request = GenerationRequest::new(full_prompt, self.options.model.clone());

        debug!(
            provider = self.provider.name(),
            model = self.provider.model_id(),
            language = %self.options.language,
            "generating code"
        );

        let output = match self.provider.generate(&request).await {
            Ok(output) => output,
            Err(err) => {
                warn!(error = %err, "generation failed");
                if self.session.is_current(ticket) {
                    self.session.cancel_request();
                }
                return Err(err);
            }
        };

        debug!(
            output_tokens = output.usage.output_tokens,
            finish_reason = ?output.finish_reason,
            "generation complete"
        );

        let record = HistoryRecord::new(
            description,
            output.text,
            self.options.language.clone(),
            self.options.code_type,
        );
        if !self.session.record_generation(ticket, record.clone()) {
            return Err(CodesmithError::Superseded);
        }
        Ok(record)
    }

    /// Like [`generate`](Self::generate), but give up after `duration`
    /// with [`CodesmithError::Timeout`]. A timed-out request leaves
    /// history untouched; its result, should the provider ever produce
    /// one, is discarded.
    pub async fn generate_with_timeout(
        &mut self,
        description: &str,
        duration: Duration,
    ) -> Result<HistoryRecord> {
        with_timeout(duration, self.generate(description)).await
    }

    /// Ask for a plain-language explanation of `code`.
    ///
    /// Follow-up answers are transient and never recorded in history.
    pub async fn explain(&self, code: &str) -> Result<String> {
        self.follow_up(prompt::explain_prompt(code), code).await
    }

    /// Ask for a review of `code` covering quality, bugs, and
    /// improvements. Not recorded in history.
    pub async fn review(&self, code: &str) -> Result<String> {
        self.follow_up(prompt::review_prompt(code), code).await
    }

    /// Ask for an improved version of `code`. Not recorded in history.
    pub async fn improve(&self, code: &str) -> Result<String> {
        self.follow_up(prompt::improve_prompt(code), code).await
    }

    async fn follow_up(&self, full_prompt: String, code: &str) -> Result<String> {
        if code.trim().is_empty() {
            return Err(CodesmithError::InvalidArgument(
                "no code to work with; generate something first".into(),
            ));
        }
        let request = GenerationRequest::new(full_prompt, self.options.model.clone());
        let output = self.provider.generate(&request).await?;
        Ok(output.text)
    }

    /// Pin a record to favorites. Returns `false` if already pinned.
    pub fn save_favorite(&mut self, record: &HistoryRecord) -> bool {
        self.session.save_favorite(record)
    }

    /// Clear generation history. Favorites are kept.
    pub fn clear_history(&mut self) {
        self.session.clear_history();
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Replace the options used for subsequent generations. Requests
    /// already in flight keep the options they were built with.
    pub fn set_options(&mut self, options: GenerationOptions) {
        self.options = options;
    }
}
