//! One active conversation: store + relay + model tier, owned explicitly.
//!
//! A UI shell holds one `ChatSession` per conversation (typically behind a
//! lock) and drives it one exchange at a time. There are no process-wide
//! singletons; all conversation state lives here.

use thiserror::Error;
use tracing::info;

use crate::conversation::{ConversationStore, SlotError, StorageSlot, Transcript};
use crate::language::detect_language_hint;
use crate::relay::{CompletionRelay, ModelTier, RelayError};

#[derive(Error, Debug)]
pub enum SessionError {
    /// The message trimmed to nothing; nothing was sent or stored.
    #[error("message is empty")]
    EmptyMessage,
    #[error(transparent)]
    Storage(#[from] SlotError),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

pub struct ChatSession {
    store: ConversationStore,
    relay: Box<dyn CompletionRelay>,
    tier: ModelTier,
}

impl ChatSession {
    /// Open a session, restoring any transcript a previous run persisted
    /// into `slot`.
    pub fn open(slot: Box<dyn StorageSlot>, relay: Box<dyn CompletionRelay>) -> Self {
        let store = ConversationStore::open(slot);
        if !store.transcript().is_empty() {
            info!(turns = store.transcript().len(), "restored persisted conversation");
        }
        Self {
            store,
            relay,
            tier: ModelTier::default(),
        }
    }

    /// Drive one exchange: append the user's turn, relay the transcript,
    /// append the reply.
    ///
    /// The `&mut self` receiver is the in-flight guard — a caller holding
    /// the session cannot issue a second request while one is outstanding.
    /// On relay failure the user's turn stays appended (no rollback) and no
    /// assistant turn is added; the caller may retry by sending another
    /// message.
    pub async fn send_message(&mut self, text: &str) -> Result<String, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyMessage);
        }

        let hint = detect_language_hint(text);
        self.store.append_user_turn(text)?;

        let reply = self
            .relay
            .request_completion(self.store.transcript(), hint, self.tier)
            .await?;

        self.store.append_assistant_turn(&reply)?;
        Ok(reply)
    }

    /// Current transcript; rendering is a pure read of this state.
    pub fn transcript(&self) -> &Transcript {
        self.store.transcript()
    }

    pub fn model_tier(&self) -> ModelTier {
        self.tier
    }

    /// Select the tier used from the next request onward.
    pub fn set_model_tier(&mut self, tier: ModelTier) {
        self.tier = tier;
    }

    /// Discard the conversation and its durable slot ("New Chat").
    pub fn new_chat(&mut self) -> Result<(), SessionError> {
        self.store.reset()?;
        Ok(())
    }
}
