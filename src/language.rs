//! Heuristic Mizo detection for reply-language selection.

use serde::{Deserialize, Serialize};

/// Marker substrings that flag a message as Mizo.
///
/// A plain case-insensitive substring scan over common Mizo words. This is
/// approximate by design — short tokens like `a` will match unrelated text —
/// and is kept as-is rather than replaced with real language detection.
const MIZO_MARKERS: [&str; 8] = [
    "chhiar", "chuan", "chu", "a", "loh", "pawisa", "thil", "hriat",
];

/// Which language the assistant should answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageHint {
    Default,
    Mizo,
}

impl Default for LanguageHint {
    fn default() -> Self {
        LanguageHint::Default
    }
}

/// Classify `text` as Mizo if it contains any marker, default otherwise.
pub fn detect_language_hint(text: &str) -> LanguageHint {
    let lowered = text.to_lowercase();
    if MIZO_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        LanguageHint::Mizo
    } else {
        LanguageHint::Default
    }
}
