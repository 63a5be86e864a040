//! System-instruction assembly for the completion endpoint.

use crate::language::LanguageHint;
use crate::lore::Lore;

/// Keystone's identity line, always present.
pub const KEYSTONE_IDENTITY: &str =
    "Keystone is the official AI of the Kingdom of Valoria. Use embedded lore to answer questions about Valoria.";

/// Directive prefixed when the user's message reads as Mizo.
const MIZO_DIRECTIVE: &str = "Respond in Mizo.";

/// Build the system instruction: optional language directive, identity,
/// then the embedded lore sections that have text.
pub fn build_system_prompt(lore: &Lore, hint: LanguageHint) -> String {
    let mut prompt = String::new();
    if hint == LanguageHint::Mizo {
        prompt.push_str(MIZO_DIRECTIVE);
        prompt.push(' ');
    }
    prompt.push_str(KEYSTONE_IDENTITY);

    for (label, text) in lore.sections() {
        if !text.is_empty() {
            prompt.push_str("\n\n");
            prompt.push_str(label);
            prompt.push_str(": ");
            prompt.push_str(text);
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hint_starts_with_identity() {
        let prompt = build_system_prompt(&Lore::default(), LanguageHint::Default);
        assert!(prompt.starts_with("Keystone is the official AI"));
        assert!(!prompt.contains(MIZO_DIRECTIVE));
    }

    #[test]
    fn mizo_hint_prefixes_directive() {
        let prompt = build_system_prompt(&Lore::default(), LanguageHint::Mizo);
        assert!(prompt.starts_with("Respond in Mizo. Keystone"));
    }

    #[test]
    fn lore_sections_are_embedded() {
        let lore = Lore {
            overview: Some("A northern kingdom.".to_string()),
            ..Lore::default()
        };
        let prompt = build_system_prompt(&lore, LanguageHint::Default);
        assert!(prompt.contains("Overview: A northern kingdom."));
        // Absent fields contribute nothing.
        assert!(!prompt.contains("History:"));
    }
}
