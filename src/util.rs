//! Small helpers: timeouts and text truncation.

use std::future::Future;
use std::time::Duration;

use crate::error::CodesmithError;

/// Wrap a future with a timeout.
pub async fn with_timeout<T>(
    duration: Duration,
    future: impl Future<Output = Result<T, CodesmithError>>,
) -> Result<T, CodesmithError> {
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => Err(CodesmithError::Timeout(duration.as_millis() as u64)),
    }
}

/// Truncate a string to at most `max_chars` characters, never splitting a
/// multi-byte character.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
    }

    #[test]
    fn truncate_at_exact_boundary() {
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("hello!", 5), "hello");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        // Each 'é' is two bytes; slicing by bytes would panic mid-char.
        let s = "ééééé";
        assert_eq!(truncate_chars(s, 3), "ééé");
    }

    #[tokio::test]
    async fn with_timeout_passes_through_success() {
        let result = with_timeout(Duration::from_secs(1), async { Ok(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn with_timeout_times_out() {
        let result: Result<(), _> = with_timeout(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(CodesmithError::Timeout(10))));
    }
}
