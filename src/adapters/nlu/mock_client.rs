//! Mock NLU Client for testing.
//!
//! Provides a configurable mock implementation of the NluClient port,
//! allowing dialog tests to run without a live NLU backend.
//!
//! # Features
//!
//! - Pre-configured results, consumed in order
//! - Error injection for backend-failure testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let client = MockNluClient::new()
//!     .with_result(NluResult::new(
//!         vec![IntentRecommendation::new("Greeting", 0.9)],
//!         vec![],
//!     ));
//!
//! let result = client.query("hi").await?;
//! assert_eq!(result.intents[0].name, "Greeting");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::NluResult;
use crate::ports::{NluClient, NluError};

/// Mock NLU client for testing.
///
/// Configurable to return specific results or inject errors. An exhausted
/// queue returns an empty result.
#[derive(Clone, Default)]
pub struct MockNluClient {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Queried utterances, for verification.
    calls: Arc<Mutex<Vec<String>>>,
}

enum MockResponse {
    Success(NluResult),
    Error(MockError),
}

/// Mock error kinds for exercising backend failure handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate a network failure.
    Network { message: String },
    /// Simulate a non-success HTTP status.
    Status { status: u16, body: String },
    /// Simulate a malformed response body.
    Parse { message: String },
    /// Simulate a transport timeout.
    Timeout { timeout_secs: u64 },
}

impl From<MockError> for NluError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::Network { message } => NluError::network(message),
            MockError::Status { status, body } => NluError::status(status, body),
            MockError::Parse { message } => NluError::parse(message),
            MockError::Timeout { timeout_secs } => NluError::Timeout { timeout_secs },
        }
    }
}

impl MockNluClient {
    /// Creates a new mock client with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful result to the queue.
    pub fn with_result(self, result: NluResult) -> Self {
        let mut responses = self.responses.lock().unwrap();
        responses.push_back(MockResponse::Success(result));
        drop(responses);
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        let mut responses = self.responses.lock().unwrap();
        responses.push_back(MockResponse::Error(error));
        drop(responses);
        self
    }

    /// Returns the utterances queried so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NluClient for MockNluClient {
    async fn query(&self, utterance: &str) -> Result<NluResult, NluError> {
        self.calls.lock().unwrap().push(utterance.to_string());

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Success(result)) => Ok(result),
            Some(MockResponse::Error(error)) => Err(error.into()),
            None => Ok(NluResult::default()),
        }
    }
}
