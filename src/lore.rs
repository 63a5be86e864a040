//! Static lore document for the Kingdom of Valoria.
//!
//! Loaded read-only from a JSON file supplied by the embedder. The lore
//! feeds system-prompt construction and a display surface; a missing field
//! simply renders as empty text.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default document path, next to the embedding shell's assets.
pub const DEFAULT_LORE_PATH: &str = "lore.json";

/// Narrative fields describing the kingdom.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lore {
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub founders: Option<String>,
    #[serde(default)]
    pub tribes: Option<String>,
    #[serde(default)]
    pub history: Option<String>,
    #[serde(default)]
    pub territories: Option<String>,
    #[serde(default)]
    pub military: Option<String>,
    #[serde(default)]
    pub church: Option<String>,
}

impl Lore {
    /// Load the lore document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read lore document {}", path.display()))?;
        serde_json::from_str(&raw).context("lore document is not valid JSON")
    }

    /// Labeled sections in display order; absent fields yield empty text.
    pub fn sections(&self) -> Vec<(&'static str, &str)> {
        [
            ("Overview", &self.overview),
            ("Founders and Great Lords", &self.founders),
            ("Tribes and Structure", &self.tribes),
            ("History", &self.history),
            ("Territories and Capital", &self.territories),
            ("Military and Units", &self.military),
            ("Church and Culture", &self.church),
        ]
        .into_iter()
        .map(|(label, field)| (label, field.as_deref().unwrap_or("")))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_fills_present_fields_and_defaults_the_rest() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"overview": "A northern kingdom.", "military": "Shield levies."}}"#
        )
        .unwrap();

        let lore = Lore::load(file.path()).unwrap();
        assert_eq!(lore.overview.as_deref(), Some("A northern kingdom."));
        assert!(lore.founders.is_none());

        let sections = lore.sections();
        assert_eq!(sections[0], ("Overview", "A northern kingdom."));
        assert_eq!(sections[1], ("Founders and Great Lords", ""));
    }

    #[test]
    fn load_rejects_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Lore::load(file.path()).is_err());
    }

    #[test]
    fn load_rejects_missing_file() {
        assert!(Lore::load("does-not-exist.json").is_err());
    }
}
