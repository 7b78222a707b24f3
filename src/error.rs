//! Error types for codesmith.

use thiserror::Error;

/// Primary error type for all codesmith operations.
#[derive(Error, Debug)]
pub enum CodesmithError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Upstream returned no usable text")]
    EmptyResponse,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Generation request was superseded; result discarded")]
    Superseded,
}

impl CodesmithError {
    /// Create an API error from a status code and message body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether a fresh user-initiated attempt could plausibly succeed.
    ///
    /// The generation path never retries on its own; callers use this to
    /// phrase the failure as transient or not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) | Self::RateLimited { .. } | Self::EmptyResponse => {
                true
            }
            Self::Api { status, .. } => (500..=599).contains(status),
            _ => false,
        }
    }

    /// Whether this is an upstream generation failure — the external call
    /// did not produce usable text. Such failures never produce a history
    /// record.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Network(_)
                | Self::Api { .. }
                | Self::RateLimited { .. }
                | Self::Timeout(_)
                | Self::EmptyResponse
                | Self::Authentication(_)
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CodesmithError>;
