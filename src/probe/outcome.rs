//! Probe outcome taxonomy.
//!
//! Three failure kinds, all terminal for the individual call: transport
//! failures, non-2xx responses, and malformed JSON bodies. None are retried.

use thiserror::Error;

/// Errors produced by a single endpoint probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Transport-level failure: DNS, connection refused, TLS, deadline.
    #[error("network error: {message}")]
    Network { message: String },

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status} {status_text}")]
    Http {
        status: u16,
        status_text: String,
        /// Response body, read best effort; absent when empty or unreadable.
        body: Option<String>,
    },

    /// The backend answered 2xx but the body was not valid JSON.
    #[error("invalid JSON in response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The client itself could not be constructed.
    #[error("client configuration error: {0}")]
    Config(String),
}

impl ProbeError {
    /// Detailed, user-facing description including the body of HTTP errors.
    pub fn detail(&self) -> String {
        match self {
            ProbeError::Http {
                body: Some(body), ..
            } => format!("{}\n{}", self, body),
            _ => self.to_string(),
        }
    }
}

/// Describe a transport failure with a heuristic hint.
///
/// The hint is derived from error-kind inspection and is advisory only;
/// callers must not branch on it.
pub fn describe_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("{} (deadline exceeded waiting for the backend)", error)
    } else if error.is_connect() {
        format!(
            "{} (backend unreachable; check the base URL and that the service is up)",
            error
        )
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_detail_includes_the_body() {
        let err = ProbeError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
            body: Some("not found".to_string()),
        };
        let detail = err.detail();
        assert!(detail.contains("HTTP 404"));
        assert!(detail.contains("not found"));
    }

    #[test]
    fn parse_errors_wrap_serde_json() {
        let inner = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = ProbeError::from(inner);
        assert!(err.to_string().contains("invalid JSON"));
    }
}
