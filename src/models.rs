//! Gemini model identifiers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Google Gemini models this crate targets.
///
/// Unknown ids parse into `Custom` so newer models work without a code
/// change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
pub enum GeminiModel {
    #[default]
    #[strum(serialize = "gemini-2.0-flash-exp")]
    Gemini20FlashExp,
    #[strum(serialize = "gemini-1.5-flash")]
    Gemini15Flash,
    #[strum(serialize = "gemini-1.5-pro")]
    Gemini15Pro,
    /// Custom/unknown Gemini model id.
    #[strum(default)]
    Custom(String),
}

impl GeminiModel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gemini20FlashExp => "gemini-2.0-flash-exp",
            Self::Gemini15Flash => "gemini-1.5-flash",
            Self::Gemini15Pro => "gemini-1.5-pro",
            Self::Custom(s) => s,
        }
    }
}
