//! Keystone conversation engine for the Kingdom of Valoria.
//!
//! Maintains an ordered transcript of turns, mirrors it into a durable
//! storage slot, and relays it to the generative-language completion
//! endpoint, appending the reply as a new turn. Rendering, menus and
//! speech stay in the embedding shell; this crate is the single source of
//! truth for conversation state.
//!
//! ```no_run
//! use keystone::{ChatSession, FileSlot, GeminiRelay, Lore, RelayConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = RelayConfig::from_env()?;
//! let lore = Lore::load("lore.json")?;
//! let relay = GeminiRelay::new(config, lore)?;
//!
//! let mut session = ChatSession::open(
//!     Box::new(FileSlot::new("data")),
//!     Box::new(relay),
//! );
//! let reply = session.send_message("Tell me about Valoria").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod conversation;
pub mod language;
pub mod lore;
pub mod prompt;
pub mod relay;
pub mod session;

pub use config::{ConfigError, RelayConfig};
pub use conversation::{
    ConversationStore, FileSlot, MemorySlot, Role, SlotError, StorageSlot, Transcript, Turn,
};
pub use language::{detect_language_hint, LanguageHint};
pub use lore::Lore;
pub use relay::{CompletionRelay, GeminiRelay, ModelTier, RelayError, FALLBACK_REPLY};
pub use session::{ChatSession, SessionError};
