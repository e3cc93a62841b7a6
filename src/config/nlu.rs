//! NLU backend configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::{ConfigError, ValidationError};

/// NLU backend configuration.
///
/// Defines how queries are built. With `model_id` set, the adapter sends
/// `id` and `subscription-key` query parameters alongside the utterance;
/// without it, `endpoint` is treated as a fully formed query URL and only the
/// URL-escaped utterance is appended as `q`.
///
/// Immutable after construction.
#[derive(Debug, Clone, Deserialize)]
pub struct NluConfig {
    /// Query endpoint.
    pub endpoint: String,

    /// Model identifier sent as the `id` query parameter.
    pub model_id: Option<String>,

    /// Subscription key sent as the `subscription-key` query parameter.
    pub subscription_key: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl NluConfig {
    /// Creates a configuration for a keyed endpoint.
    pub fn new(
        endpoint: impl Into<String>,
        model_id: impl Into<String>,
        subscription_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            model_id: Some(model_id.into()),
            subscription_key: Some(Secret::new(subscription_key.into())),
            timeout_secs: default_timeout(),
        }
    }

    /// Creates a configuration from a fully formed query URL.
    pub fn from_url(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model_id: None,
            subscription_key: None,
            timeout_secs: default_timeout(),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Load configuration from environment variables
    ///
    /// Reads `INTENT_DIALOG_NLU_*` variables (loading a `.env` file first if
    /// present):
    ///
    /// - `INTENT_DIALOG_NLU_ENDPOINT`
    /// - `INTENT_DIALOG_NLU_MODEL_ID`
    /// - `INTENT_DIALOG_NLU_SUBSCRIPTION_KEY`
    /// - `INTENT_DIALOG_NLU_TIMEOUT_SECS`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, values cannot
    /// be parsed, or validation fails.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(config::Environment::with_prefix("INTENT_DIALOG_NLU"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Exposes the subscription key for request construction.
    pub(crate) fn subscription_key(&self) -> Option<&str> {
        self.subscription_key
            .as_ref()
            .map(|key| key.expose_secret().as_str())
    }

    /// Validate NLU configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.endpoint.is_empty() {
            return Err(ValidationError::MissingRequired("endpoint"));
        }
        if reqwest::Url::parse(&self.endpoint).is_err() {
            return Err(ValidationError::InvalidEndpointUrl(self.endpoint.clone()));
        }
        if self.model_id.as_deref().is_some_and(str::is_empty) {
            return Err(ValidationError::MissingRequired("model_id"));
        }
        if self.model_id.is_some() && self.subscription_key().unwrap_or("").is_empty() {
            return Err(ValidationError::MissingRequired("subscription_key"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    60
}
