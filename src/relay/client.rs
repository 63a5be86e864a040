//! HTTP implementation of the relay against the generativelanguage API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::wire::{extract_reply_text, GenerateContentRequest, GenerateContentResponse};
use super::{CompletionRelay, ModelTier, RelayError};
use crate::config::RelayConfig;
use crate::conversation::Transcript;
use crate::language::LanguageHint;
use crate::lore::Lore;
use crate::prompt;

/// Relay backed by the vendor HTTP endpoint.
///
/// Holds the loaded lore so the system instruction can be rebuilt per
/// request (the language directive depends on the current hint).
pub struct GeminiRelay {
    client: Client,
    config: RelayConfig,
    lore: Lore,
}

impl GeminiRelay {
    pub fn new(config: RelayConfig, lore: Lore) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| RelayError::Transport(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            client,
            config,
            lore,
        })
    }

    /// `<base>/v1beta/models/<model>:generateContent?key=<credential>`
    fn endpoint(&self, tier: ModelTier) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.api_url.as_str().trim_end_matches('/'),
            tier.model_id(),
            self.config.api_key,
        )
    }
}

#[async_trait]
impl CompletionRelay for GeminiRelay {
    #[instrument(
        skip(self, transcript),
        fields(request_id = %Uuid::new_v4(), model = tier.model_id(), turns = transcript.len())
    )]
    async fn request_completion(
        &self,
        transcript: &Transcript,
        hint: LanguageHint,
        tier: ModelTier,
    ) -> Result<String, RelayError> {
        let system_prompt = prompt::build_system_prompt(&self.lore, hint);
        let body = GenerateContentRequest::from_transcript(&system_prompt, transcript);

        let response = self
            .client
            .post(self.endpoint(tier))
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    RelayError::Transport(
                        "request timeout - the API took too long to respond".to_string(),
                    )
                } else if err.is_connect() {
                    RelayError::Transport("connection error - unable to reach the API".to_string())
                } else {
                    RelayError::Transport(format!("network error: {err}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "endpoint returned error status");
            return Err(RelayError::Endpoint {
                status: status.as_u16(),
            });
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            warn!(error = %err, "response body was not valid JSON");
            RelayError::MalformedResponse
        })?;

        let reply = extract_reply_text(parsed).ok_or(RelayError::MalformedResponse)?;
        debug!(reply_len = reply.len(), "completion received");
        Ok(reply)
    }
}
