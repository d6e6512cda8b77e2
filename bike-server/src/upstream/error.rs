//! Upstream error types.

/// Errors that can occur when fetching from the upstream bike-share API.
///
/// Transport and decode failures are deliberately not distinguished by
/// callers above this layer; they are all "the upstream fetch failed".
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized (invalid client identifier)")]
    Unauthorized,

    /// API returned an error status
    #[error("failed to invoke API, got error code: {status}, reason: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Client is missing required configuration
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Mock fixture data could not be loaded
    #[error("fixture error: {message}")]
    Fixture { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = UpstreamError::Api {
            status: 400,
            message: "{\"error\": \"something\"}".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to invoke API, got error code: 400, reason: {\"error\": \"something\"}"
        );

        let err = UpstreamError::Json {
            message: "expected value at line 1 column 1".into(),
            body: Some("hello".into()),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: expected value at line 1 column 1"
        );

        assert_eq!(
            UpstreamError::Unauthorized.to_string(),
            "unauthorized (invalid client identifier)"
        );

        let err = UpstreamError::NotConfigured("client identifier is required".into());
        assert_eq!(
            err.to_string(),
            "not configured: client identifier is required"
        );
    }
}
