//! Failures that stop a probe before a usable HTTP status is obtained.
//!
//! The `Display` text of each variant is what ends up in
//! [`ProbeResult::error`](super::ProbeResult).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProbeError {
    /// No credential for the provider; no request was sent.
    #[error("credential missing")]
    CredentialMissing,
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProbeError::Timeout
        } else if err.is_connect() {
            ProbeError::Connect(err.to_string())
        } else if err.is_request() || err.is_body() || err.is_decode() {
            ProbeError::Request(err.to_string())
        } else {
            ProbeError::Unexpected(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_texts() {
        assert_eq!(ProbeError::CredentialMissing.to_string(), "credential missing");
        assert_eq!(ProbeError::Timeout.to_string(), "request timed out");
        assert_eq!(
            ProbeError::Connect("refused".into()).to_string(),
            "connection failed: refused"
        );
    }
}
