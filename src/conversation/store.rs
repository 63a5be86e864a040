//! Core store logic: append, persist, restore, reset.

use tracing::{debug, warn};

use super::slot::{SlotError, StorageSlot};
use super::turn::{Transcript, Turn};

/// Owns the in-memory transcript and its durable mirror.
///
/// The store is the single source of truth for conversation state;
/// rendering is a pure read of store state, never the reverse. Every
/// append rewrites the slot wholesale.
pub struct ConversationStore {
    transcript: Transcript,
    slot: Box<dyn StorageSlot>,
}

impl ConversationStore {
    /// Open a store over `slot`, restoring whatever transcript a previous
    /// run persisted there.
    pub fn open(slot: Box<dyn StorageSlot>) -> Self {
        let mut store = Self {
            transcript: Transcript::new(),
            slot,
        };
        store.transcript = store.load_persisted();
        store
    }

    /// Append a user turn and persist.
    ///
    /// Input that trims to nothing is a no-op: the transcript is returned
    /// unchanged and the slot is not rewritten.
    pub fn append_user_turn(&mut self, text: &str) -> Result<&Transcript, SlotError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(&self.transcript);
        }
        self.transcript.push(Turn::user(text));
        self.persist()?;
        Ok(&self.transcript)
    }

    /// Append an assistant turn and persist.
    pub fn append_assistant_turn(&mut self, text: &str) -> Result<&Transcript, SlotError> {
        self.transcript.push(Turn::assistant(text));
        self.persist()?;
        Ok(&self.transcript)
    }

    /// Read the durable slot back into a transcript.
    ///
    /// An absent or unparsable value yields an empty transcript; this
    /// never fails the caller.
    pub fn load_persisted(&self) -> Transcript {
        let Some(raw) = self.slot.read() else {
            return Transcript::new();
        };
        match serde_json::from_str(&raw) {
            Ok(transcript) => transcript,
            Err(err) => {
                warn!(error = %err, "persisted transcript unparsable, starting empty");
                Transcript::new()
            }
        }
    }

    /// Clear both the in-memory transcript and the durable slot.
    pub fn reset(&mut self) -> Result<(), SlotError> {
        self.transcript = Transcript::new();
        self.slot.clear()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    fn persist(&mut self) -> Result<(), SlotError> {
        let raw = serde_json::to_string(&self.transcript)?;
        self.slot.write(&raw)?;
        debug!(turns = self.transcript.len(), "transcript persisted");
        Ok(())
    }
}
