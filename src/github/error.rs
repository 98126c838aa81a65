use thiserror::Error;

/// Longest response body kept in an HTTP error message
const MAX_BODY_IN_ERROR: usize = 200;

/// Failure of a single search page request
#[derive(Debug, Error)]
pub enum SearchError {
    /// Connection, DNS, TLS or read failure
    #[error("network error: {0}")]
    Network(String),

    /// Non-success status, e.g. the unauthenticated rate limit (403/422)
    #[error("GitHub returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Body was not JSON or lacked a required field
    #[error("could not parse search response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SearchError {
    /// Build an HTTP error, preferring GitHub's `{"message": ...}` text over the raw body
    pub fn http(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.chars().take(MAX_BODY_IN_ERROR).collect());
        SearchError::Http { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_uses_api_message() {
        let body = r#"{"message":"API rate limit exceeded for 127.0.0.1.","documentation_url":"https://docs.github.com"}"#;
        let err = SearchError::http(403, body);
        assert_eq!(err.to_string(), "GitHub returned HTTP 403: API rate limit exceeded for 127.0.0.1.");
    }

    #[test]
    fn test_http_error_truncates_plain_body() {
        let body = "x".repeat(1000);
        match SearchError::http(502, &body) {
            SearchError::Http { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message.len(), MAX_BODY_IN_ERROR);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
