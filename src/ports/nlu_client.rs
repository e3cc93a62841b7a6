//! NLU Client Port - Interface for the natural-language-understanding backend.
//!
//! Abstracts the backend that scores candidate intents and extracts entities
//! from free text, so the dialog loop can be exercised without a live service.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::NluResult;

/// Port for NLU backend queries.
///
/// One query per inbound message; no retries and no caching. The awaited call
/// is the dialog's sole suspension point per dispatch.
#[async_trait]
pub trait NluClient: Send + Sync {
    /// Queries the backend with the raw utterance text and parses the
    /// response into a structured result.
    ///
    /// A network failure, a non-success status, or a malformed body fails
    /// with [`NluError`]; no partial result is returned.
    async fn query(&self, utterance: &str) -> Result<NluResult, NluError>;
}

/// NLU backend errors.
#[derive(Debug, Error)]
pub enum NluError {
    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Backend returned a non-success HTTP status.
    #[error("backend returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// Failed to parse the backend response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request exceeded the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },
}

impl NluError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        NluError::Network(message.into())
    }

    /// Creates a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        NluError::Status {
            status,
            body: body.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        NluError::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_their_context() {
        let err = NluError::status(500, "internal error");
        assert_eq!(err.to_string(), "backend returned status 500: internal error");

        let err = NluError::parse("unexpected token");
        assert_eq!(err.to_string(), "parse error: unexpected token");

        let err = NluError::Timeout { timeout_secs: 60 };
        assert_eq!(err.to_string(), "request timed out after 60s");
    }
}
