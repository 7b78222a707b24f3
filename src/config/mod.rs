//! Configuration: env-resolved credentials plus saved preferences.

pub mod preferences;

pub use preferences::PreferencesStore;

/// Runtime configuration resolved from the environment.
///
/// Credentials are never compiled in and never persisted by this crate;
/// they come from the process environment (or a `.env` file) each run.
#[derive(Debug, Clone, Default)]
pub struct CodesmithConfig {
    api_key: Option<String>,
    base_url: Option<String>,
}

impl CodesmithConfig {
    /// Empty config with no credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables.
    ///
    /// `GOOGLE_API_KEY` is checked first, then `GEMINI_API_KEY`.
    /// `GEMINI_BASE_URL` overrides the default API endpoint.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::new();

        for env_var in ["GOOGLE_API_KEY", "GEMINI_API_KEY"] {
            if let Ok(key) = std::env::var(env_var) {
                if !key.is_empty() {
                    config.set_api_key(key);
                    break;
                }
            }
        }

        if let Ok(url) = std::env::var("GEMINI_BASE_URL") {
            config.set_base_url(url);
        }

        config
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = Some(url.into());
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Check if an API key is configured.
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_has_no_credentials() {
        let config = CodesmithConfig::new();
        assert!(!config.has_credentials());
        assert_eq!(config.api_key(), None);
        assert_eq!(config.base_url(), None);
    }

    #[test]
    fn explicit_key_is_returned() {
        let mut config = CodesmithConfig::new();
        config.set_api_key("k-123");
        assert!(config.has_credentials());
        assert_eq!(config.api_key(), Some("k-123"));
    }

    #[test]
    fn base_url_override_is_returned() {
        let mut config = CodesmithConfig::new();
        config.set_base_url("http://localhost:9090");
        assert_eq!(config.base_url(), Some("http://localhost:9090"));
    }
}
