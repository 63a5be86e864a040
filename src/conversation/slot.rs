//! Durable storage slot: one named value, overwritten wholesale.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Fixed name of the conversation slot, mirroring the original storage key.
pub const SLOT_NAME: &str = "keystone-current-chat.json";

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("slot encode failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("slot write failed: {0}")]
    Write(#[source] io::Error),
    #[error("slot clear failed: {0}")]
    Clear(#[source] io::Error),
}

/// A single key-value slot the transcript is mirrored into.
///
/// Writes replace the whole value; there is no incremental patching.
pub trait StorageSlot: Send + Sync {
    /// Read the current value; `None` when the slot is absent or unreadable.
    fn read(&self) -> Option<String>;

    /// Overwrite the slot with `value`.
    fn write(&mut self, value: &str) -> Result<(), SlotError>;

    /// Delete the slot value.
    fn clear(&mut self) -> Result<(), SlotError>;
}

/// File-backed slot: one JSON file with a fixed name under `dir`.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SLOT_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "slot unreadable, treating as absent");
                None
            }
        }
    }

    fn write(&mut self, value: &str) -> Result<(), SlotError> {
        fs::write(&self.path, value).map_err(SlotError::Write)
    }

    fn clear(&mut self) -> Result<(), SlotError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SlotError::Clear(err)),
        }
    }
}

/// Volatile slot for tests and embeddings that opt out of persistence.
#[derive(Default)]
pub struct MemorySlot {
    value: Option<String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.value.clone()
    }

    fn write(&mut self, value: &str) -> Result<(), SlotError> {
        self.value = Some(value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SlotError> {
        self.value = None;
        Ok(())
    }
}
