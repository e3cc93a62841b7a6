//! HTTP NLU Client - Implementation of the NluClient port over HTTP GET.
//!
//! Issues one `GET <endpoint>?[id=..&subscription-key=..&]q=<utterance>` per
//! query and parses the JSON body into an [`NluResult`]. One attempt per
//! query; a transport timeout, non-success status, or malformed body fails
//! the turn.
//!
//! # Configuration
//!
//! ```ignore
//! let config = NluConfig::new("https://nlu.example.com/v1/application", "model-1", "key");
//! let client = HttpNluClient::new(config)?;
//! let result = client.query("book a flight to paris").await?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::{NluConfig, ValidationError};
use crate::domain::NluResult;
use crate::ports::{NluClient, NluError};

/// NLU backend client issuing a single GET query per utterance.
pub struct HttpNluClient {
    config: NluConfig,
    client: Client,
}

impl HttpNluClient {
    /// Creates a new client, validating the configuration first.
    pub fn new(config: NluConfig) -> Result<Self, ValidationError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self { config, client })
    }

    /// Builds the query URL for an utterance.
    ///
    /// Credentials and the escaped utterance are appended as query pairs,
    /// preserving any query the endpoint template already carries.
    fn query_url(&self, utterance: &str) -> Result<Url, NluError> {
        let mut url = Url::parse(&self.config.endpoint)
            .map_err(|e| NluError::network(format!("invalid endpoint URL: {}", e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            if let Some(ref model_id) = self.config.model_id {
                pairs.append_pair("id", model_id);
            }
            if let Some(key) = self.config.subscription_key() {
                pairs.append_pair("subscription-key", key);
            }
            pairs.append_pair("q", utterance);
        }

        Ok(url)
    }
}

#[async_trait]
impl NluClient for HttpNluClient {
    async fn query(&self, utterance: &str) -> Result<NluResult, NluError> {
        let url = self.query_url(utterance)?;

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                NluError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else if e.is_connect() {
                NluError::network(format!("Connection failed: {}", e))
            } else {
                NluError::network(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NluError::network(e.to_string()))?;

        // Best-effort diagnostics; never affects control flow.
        tracing::debug!(status = %status, body = %body, "NLU backend response");

        if !status.is_success() {
            return Err(NluError::status(status.as_u16(), body));
        }

        serde_json::from_str(&body)
            .map_err(|e| NluError::parse(format!("Failed to parse NLU response: {}", e)))
    }
}
