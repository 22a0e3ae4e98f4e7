//! Creative bio generation.
//!
//! The dashboard offers to write the creator's "About Me" text from their
//! name, category, and a chosen vibe. The model call is a single opaque
//! operation behind the [`BioGenerator`] port; the Gemini-backed
//! implementation degrades to canned text on any failure, so the port itself
//! never fails and the dashboard never blocks on the network being friendly.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default model used by [`GeminiBioGenerator`].
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Reply used when the model answers with empty text.
const EMPTY_REPLY_BIO: &str = "I create cool stuff. Support my work!";

/// Capability port for bio generation: name, category, vibe in, text out.
///
/// Implementations must not fail; degrade to a sensible default instead.
#[async_trait]
pub trait BioGenerator: Send + Sync {
    async fn generate(&self, name: &str, category: &str, vibe: &str) -> String;
}

/// Fallback text used when the generation call fails outright.
pub fn fallback_bio(name: &str, category: &str) -> String {
    format!(
        "Hi, I'm {name}. I create {category} content. If you love what I do, consider supporting me!"
    )
}

fn prompt(name: &str, category: &str, vibe: &str) -> String {
    format!(
        "Write a short, engaging, and warm \"About Me\" bio for a creator named {name} \
         who creates content about \"{category}\". The vibe should be \"{vibe}\". \
         The goal is to encourage visitors to \"buy them a chai\" (support them via \
         small donations). Keep it under 300 characters. No hashtags."
    )
}

/// Errors internal to the Gemini call. Absorbed by the port; surfaced only in
/// logs.
#[derive(Debug, Error)]
enum BioError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("response carried no text")]
    EmptyResponse,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Bio generation backed by the Gemini `generateContent` endpoint.
pub struct GeminiBioGenerator {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiBioGenerator {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        GeminiBioGenerator {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    async fn call(&self, prompt: &str) -> Result<String, BioError> {
        let url = format!("{API_BASE}/{}:generateContent?key={}", self.model, self.api_key);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };
        let response: GenerateContentResponse = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(BioError::EmptyResponse)?;
        Ok(text)
    }
}

#[async_trait]
impl BioGenerator for GeminiBioGenerator {
    async fn generate(&self, name: &str, category: &str, vibe: &str) -> String {
        match self.call(&prompt(name, category, vibe)).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    EMPTY_REPLY_BIO.to_string()
                } else {
                    text.to_string()
                }
            }
            Err(error) => {
                tracing::warn!(%error, "bio generation failed, using fallback");
                fallback_bio(name, category)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedBioGenerator(&'static str);

    #[async_trait]
    impl BioGenerator for CannedBioGenerator {
        async fn generate(&self, _name: &str, _category: &str, _vibe: &str) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_prompt_mentions_all_inputs() {
        let text = prompt("Asha", "watercolor art", "funny");
        assert!(text.contains("Asha"));
        assert!(text.contains("watercolor art"));
        assert!(text.contains("\"funny\""));
        assert!(text.contains("under 300 characters"));
    }

    #[test]
    fn test_fallback_bio_mentions_name_and_category() {
        let text = fallback_bio("Asha", "Art");
        assert!(text.contains("Asha"));
        assert!(text.contains("Art"));
    }

    #[tokio::test]
    async fn test_port_is_object_safe() {
        let generator: Box<dyn BioGenerator> = Box::new(CannedBioGenerator("chai time"));
        assert_eq!(generator.generate("A", "B", "C").await, "chai time");
    }

    #[test]
    fn test_response_shape_deserializes() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Hello there"}],"role":"model"}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text = &response.candidates[0].content.parts[0].text;
        assert_eq!(text, "Hello there");
    }

    #[test]
    fn test_empty_response_deserializes() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }
}
