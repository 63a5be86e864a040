//! Wire types for the generative-language endpoint.
//!
//! Request body is `{"contents": [{role, parts:[{text}]}, ...]}` with the
//! system instruction first, then every transcript turn in order. The reply
//! is read from the fixed path `candidates[0].content.parts[0].text`.

use serde::{Deserialize, Serialize};

use crate::conversation::{Role, Transcript};

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    /// Convert a transcript into the endpoint's turn format.
    pub fn from_transcript(system_prompt: &str, transcript: &Transcript) -> Self {
        let mut contents = Vec::with_capacity(transcript.len() + 1);
        contents.push(Content {
            role: "system".to_string(),
            parts: vec![Part {
                text: system_prompt.to_string(),
            }],
        });
        for turn in transcript {
            contents.push(Content {
                role: wire_role(turn.role).to_string(),
                parts: vec![Part {
                    text: turn.text.clone(),
                }],
            });
        }
        Self { contents }
    }
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    pub parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

/// Pull the reply text out of a response, `None` when any hop of the fixed
/// path is missing.
pub fn extract_reply_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates?
        .into_iter()
        .next()?
        .content?
        .parts?
        .into_iter()
        .next()?
        .text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Turn;

    #[test]
    fn request_places_system_instruction_first() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::user("Hello there"));
        transcript.push(Turn::assistant("Hi, traveler."));

        let request = GenerateContentRequest::from_transcript("You are Keystone.", &transcript);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "system");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "You are Keystone.");
        assert_eq!(json["contents"][1]["role"], "user");
        assert_eq!(json["contents"][1]["parts"][0]["text"], "Hello there");
        assert_eq!(json["contents"][2]["role"], "assistant");
    }

    #[test]
    fn reply_is_extracted_from_the_fixed_path() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hi, traveler."}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(extract_reply_text(response).as_deref(), Some("Hi, traveler."));
    }

    #[test]
    fn missing_reply_field_yields_none() {
        for raw in [
            r#"{}"#,
            r#"{"candidates": []}"#,
            r#"{"candidates": [{}]}"#,
            r#"{"candidates": [{"content": {"parts": []}}]}"#,
            r#"{"candidates": [{"content": {"parts": [{}]}}]}"#,
        ] {
            let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
            assert!(extract_reply_text(response).is_none(), "raw: {raw}");
        }
    }
}
