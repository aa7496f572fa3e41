//! Client for the external text-structuring service.
//!
//! The service is an OpenAI-compatible chat-completions endpoint: one POST
//! per address carrying the raw signals and the desired output schema, whose
//! response envelope wraps a JSON-encoded structured record. Every way the
//! call can go wrong maps to a distinct [`StructurerError`] variant so
//! callers can inspect the reason; none are absorbed.

mod error;
mod prompt;

pub use error::StructurerError;

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use brandsight_core::{RawSignals, StructuredInsights};

use crate::prompt::build_prompt;

/// Maximum number of competitor suggestions kept from a response.
const MAX_COMPETITOR_SUGGESTIONS: usize = 5;

/// Explicit configuration for the structuring service.
///
/// Passed in at construction time; nothing is read from the environment
/// here.
#[derive(Debug, Clone)]
pub struct StructurerConfig {
    /// Chat-completions URL of the structuring service.
    pub endpoint: String,
    /// Bearer token for the service.
    pub api_key: String,
    /// Which backend model to request.
    pub model: String,
    /// Per-call deadline in seconds.
    pub timeout_secs: u64,
}

/// HTTP client for the structuring service.
pub struct Structurer {
    client: reqwest::Client,
    config: StructurerConfig,
}

#[derive(Debug, Deserialize)]
struct CompletionEnvelope {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

impl Structurer {
    /// Creates a `Structurer` with the given service configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StructurerError::Transport`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(config: StructurerConfig) -> Result<Self, StructurerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Sends one raw-signals record to the service and parses the normalized
    /// record out of the completion envelope.
    ///
    /// Competitor suggestions beyond five are discarded.
    ///
    /// # Errors
    ///
    /// - [`StructurerError::Transport`] — network failure reaching the service.
    /// - [`StructurerError::UnexpectedStatus`] — non-success status.
    /// - [`StructurerError::InvalidEnvelope`] — body is not a completion envelope.
    /// - [`StructurerError::MissingContent`] — envelope has no message content.
    /// - [`StructurerError::InvalidContent`] — content is not a structured record.
    pub async fn structure(
        &self,
        raw: &RawSignals,
        site_url: &str,
    ) -> Result<StructuredInsights, StructurerError> {
        let payload = json!({
            "model": self.config.model,
            "response_format": { "type": "json_object" },
            "messages": [
                {
                    "role": "system",
                    "content": "You are a helpful assistant for ecommerce insights."
                },
                {
                    "role": "user",
                    "content": build_prompt(raw, site_url)
                }
            ],
            "temperature": 0.7,
            "max_tokens": 4096
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StructurerError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope: CompletionEnvelope = serde_json::from_str(&body)
            .map_err(|source| StructurerError::InvalidEnvelope { source })?;

        let content = envelope
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(StructurerError::MissingContent)?;

        let mut insights: StructuredInsights = serde_json::from_str(&content)
            .map_err(|source| StructurerError::InvalidContent { source })?;

        if insights.competitors.len() > MAX_COMPETITOR_SUGGESTIONS {
            tracing::debug!(
                site_url,
                suggested = insights.competitors.len(),
                "truncating competitor suggestions to {MAX_COMPETITOR_SUGGESTIONS}"
            );
            insights.competitors.truncate(MAX_COMPETITOR_SUGGESTIONS);
        }

        Ok(insights)
    }
}
