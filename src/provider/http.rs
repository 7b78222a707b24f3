//! Shared HTTP client and error-mapping utilities.

use std::sync::OnceLock;

use crate::error::CodesmithError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Map a non-200 HTTP status to the matching error variant.
pub fn status_to_error(status: u16, body: &str) -> CodesmithError {
    match status {
        401 | 403 => CodesmithError::Authentication(body.to_string()),
        429 => CodesmithError::RateLimited {
            retry_after_ms: extract_retry_after(body),
        },
        _ => CodesmithError::api(status, body),
    }
}

fn extract_retry_after(body: &str) -> Option<u64> {
    // Try to parse retry-after from JSON error body
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("retry_after"))
                .and_then(|r| r.as_f64())
                .map(|s| (s * 1000.0) as u64)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_authentication() {
        assert!(matches!(
            status_to_error(401, "bad key"),
            CodesmithError::Authentication(_)
        ));
        assert!(matches!(
            status_to_error(403, "forbidden"),
            CodesmithError::Authentication(_)
        ));
    }

    #[test]
    fn rate_limit_extracts_retry_after_seconds() {
        let body = r#"{"error": {"retry_after": 2.5}}"#;
        match status_to_error(429, body) {
            CodesmithError::RateLimited { retry_after_ms } => {
                assert_eq!(retry_after_ms, Some(2500));
            }
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn rate_limit_without_hint_has_no_delay() {
        match status_to_error(429, "slow down") {
            CodesmithError::RateLimited { retry_after_ms } => {
                assert_eq!(retry_after_ms, None);
            }
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn other_statuses_become_api_errors() {
        match status_to_error(500, "boom") {
            CodesmithError::Api { status, .. } => assert_eq!(status, 500),
            other => panic!("expected Api, got {other:?}"),
        }
    }
}
