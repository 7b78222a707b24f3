//! The stored unit of session history: one completed generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::options::{CodeType, Language};
use crate::util::truncate_chars;

/// Stored prompts are capped at this many characters.
pub const MAX_PROMPT_LEN: usize = 100;

/// One completed generation: the user's request, the code the upstream
/// model returned for it, and enough metadata to re-display and export it.
///
/// Equality is value equality over all fields — the favorites dedup
/// contract relies on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    /// The user's request, truncated to [`MAX_PROMPT_LEN`] characters.
    pub prompt: String,
    /// Upstream response text, stored verbatim.
    pub code: String,
    pub language: Language,
    pub code_type: CodeType,
    /// Assigned at construction; the generator constructs and appends in
    /// one motion, so timestamps are non-decreasing across a session.
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    /// Create a record stamped with the current time. Empty prompt or
    /// code strings are accepted as-is; no field validation is performed.
    pub fn new(
        prompt: impl AsRef<str>,
        code: impl Into<String>,
        language: Language,
        code_type: CodeType,
    ) -> Self {
        Self {
            prompt: truncate_chars(prompt.as_ref(), MAX_PROMPT_LEN),
            code: code.into(),
            language,
            code_type,
            timestamp: Utc::now(),
        }
    }

    /// Short prompt excerpt for list displays, ellipsized when truncated.
    pub fn preview(&self, max_chars: usize) -> String {
        if self.prompt.chars().count() > max_chars {
            format!("{}...", truncate_chars(&self.prompt, max_chars))
        } else {
            self.prompt.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_truncates_long_prompts() {
        let long = "x".repeat(500);
        let record = HistoryRecord::new(&long, "code", Language::Python, CodeType::Function);
        assert_eq!(record.prompt.chars().count(), MAX_PROMPT_LEN);
    }

    #[test]
    fn new_keeps_short_prompts_intact() {
        let record = HistoryRecord::new("sort a list", "code", Language::Go, CodeType::Script);
        assert_eq!(record.prompt, "sort a list");
    }

    #[test]
    fn new_accepts_empty_fields() {
        let record = HistoryRecord::new("", "", Language::Rust, CodeType::Function);
        assert!(record.prompt.is_empty());
        assert!(record.code.is_empty());
    }

    #[test]
    fn truncation_is_char_safe() {
        // 150 two-byte chars; a byte slice at 100 would split one.
        let prompt = "é".repeat(150);
        let record = HistoryRecord::new(&prompt, "code", Language::Python, CodeType::Function);
        assert_eq!(record.prompt.chars().count(), MAX_PROMPT_LEN);
    }

    #[test]
    fn preview_ellipsizes() {
        let record = HistoryRecord::new(
            "write a web scraper for product prices",
            "code",
            Language::Python,
            CodeType::Script,
        );
        assert_eq!(record.preview(10), "write a we...");
        assert_eq!(record.preview(100), "write a web scraper for product prices");
    }

    #[test]
    fn value_equality_covers_all_fields() {
        let a = HistoryRecord::new("p", "c", Language::Python, CodeType::Function);
        let mut b = a.clone();
        assert_eq!(a, b);
        b.code = "different".into();
        assert_ne!(a, b);
    }
}
