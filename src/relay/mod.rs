//! Relay to the external completion endpoint: model tiers, the relay
//! seam, and the failure taxonomy.

pub mod client;
pub mod wire;

pub use client::GeminiRelay;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conversation::Transcript;
use crate::language::LanguageHint;

/// Single user-visible message every relay failure folds into.
pub const FALLBACK_REPLY: &str =
    "Sorry, Keystone could not get a response. Check your API key.";

/// Which backend model variant services a request.
///
/// Switching tiers takes effect on the next request only, never
/// retroactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Flash,
    Pro,
}

impl Default for ModelTier {
    fn default() -> Self {
        ModelTier::Flash
    }
}

impl ModelTier {
    /// Backend model identifier used in the endpoint URL.
    pub fn model_id(self) -> &'static str {
        match self {
            ModelTier::Flash => "gemini-1.5-flash",
            ModelTier::Pro => "gemini-1.5-pro",
        }
    }

    /// Short label for a tier toggle in an embedding UI.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelTier::Flash => "1.5 Flash",
            ModelTier::Pro => "1.5 Pro",
        }
    }

    /// Map a two-state toggle to a tier: enhanced selects `Pro`.
    pub fn from_toggle(enhanced: bool) -> Self {
        if enhanced {
            ModelTier::Pro
        } else {
            ModelTier::Flash
        }
    }
}

#[derive(Error, Debug)]
pub enum RelayError {
    /// Endpoint unreachable, timed out, or the request failed in transit.
    #[error("transport failure: {0}")]
    Transport(String),
    /// Endpoint answered with a non-success status.
    #[error("endpoint returned status {status}")]
    Endpoint { status: u16 },
    /// A response arrived but the reply field was not where expected.
    #[error("response did not contain a reply at the expected path")]
    MalformedResponse,
}

impl RelayError {
    /// Every relay failure maps to the same user-visible fallback string;
    /// the distinction between variants is for logs only.
    pub fn user_message(&self) -> &'static str {
        FALLBACK_REPLY
    }
}

/// The seam the session calls through to obtain a completion.
///
/// Implementations make exactly one outbound call per invocation, with no
/// automatic retry. Callers never issue a second request for the same
/// transcript before the first resolves.
#[async_trait]
pub trait CompletionRelay: Send + Sync {
    async fn request_completion(
        &self,
        transcript: &Transcript,
        hint: LanguageHint,
        tier: ModelTier,
    ) -> Result<String, RelayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_defaults_to_flash() {
        assert_eq!(ModelTier::default(), ModelTier::Flash);
        assert_eq!(ModelTier::default().model_id(), "gemini-1.5-flash");
    }

    #[test]
    fn toggle_maps_to_tiers() {
        assert_eq!(ModelTier::from_toggle(false), ModelTier::Flash);
        assert_eq!(ModelTier::from_toggle(true), ModelTier::Pro);
        assert_eq!(ModelTier::from_toggle(true).display_name(), "1.5 Pro");
    }

    #[test]
    fn every_failure_shares_one_fallback() {
        let errors = [
            RelayError::Transport("unreachable".to_string()),
            RelayError::Endpoint { status: 500 },
            RelayError::MalformedResponse,
        ];
        for err in &errors {
            assert_eq!(err.user_message(), FALLBACK_REPLY);
        }
    }
}
