//! The stateless profile-link codec.
//!
//! A profile travels inside a shareable link as a [`ProfileToken`]: canonical
//! JSON, percent-escaped to the `encodeURIComponent` alphabet (so arbitrary
//! Unicode survives the byte-level transform), then standard base64. The
//! pipeline matches the original web client's
//! `btoa(encodeURIComponent(JSON.stringify(data)))` byte for byte, so tokens
//! are interchangeable between the two implementations.
//!
//! # Contract
//!
//! Neither direction ever panics or raises across the boundary:
//!
//! - [`ProfileToken::encode`] returns the sentinel empty token when
//!   serialization is structurally impossible (practically unreachable for
//!   plain string fields).
//! - [`ProfileToken::decode`] absorbs every failure mode - foreign alphabet
//!   characters, truncation, undecodable bytes, malformed JSON, or a payload
//!   that parses but is not a record - into [`DecodeResult::Corrupt`].
//!
//! Callers must treat `Corrupt` as user-facing link corruption, not as "the
//! profile fields are empty": an all-empty profile round-trips to
//! `Valid(Creator::default())`, which is a different value.
//!
//! # Round-trip law
//!
//! For every representable profile `p`, `ProfileToken::encode(&p).decode()`
//! yields `Valid(p)`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as b64;
use std::fmt;
use std::fmt::Display;

use crate::escape::{escape_component, unescape_component};
use crate::profile::Creator;

/// A URL-safe token carrying a serialized [`Creator`] profile.
///
/// The token alphabet is standard base64 (`A-Z a-z 0-9 + / =`), safe to place
/// in a URL query value once percent-encoded. Construction from arbitrary
/// strings never fails; validity is only determined by [`decode`](Self::decode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileToken(String);

/// Outcome of decoding a [`ProfileToken`].
///
/// The corruption case is a distinct variant rather than a nullable value so
/// that callers cannot silently conflate "the link is damaged" with "the
/// profile fields are empty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeResult {
    /// The token decoded to a structurally valid profile record.
    Valid(Creator),
    /// The token was damaged at some stage: not base64, undecodable bytes,
    /// malformed JSON, or a payload that is not a record.
    Corrupt,
}

impl DecodeResult {
    /// The decoded profile, if any.
    pub fn ok(self) -> Option<Creator> {
        match self {
            DecodeResult::Valid(creator) => Some(creator),
            DecodeResult::Corrupt => None,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, DecodeResult::Corrupt)
    }
}

impl ProfileToken {
    /// Serializes a profile into a token.
    ///
    /// Returns the sentinel empty token instead of failing: the caller is
    /// typically composing a user-facing shareable link and must always get
    /// *some* string back.
    pub fn encode(profile: &Creator) -> ProfileToken {
        let json = match serde_json::to_string(profile) {
            Ok(json) => json,
            Err(error) => {
                tracing::error!(%error, "profile serialization failed");
                return ProfileToken(String::new());
            }
        };
        let escaped = escape_component(&json);
        ProfileToken(b64.encode(escaped.as_bytes()))
    }

    /// Reverses [`encode`](Self::encode), absorbing all failures into
    /// [`DecodeResult::Corrupt`].
    ///
    /// Incidental surrounding whitespace (copy-paste artifacts) is trimmed
    /// before decoding. The payload must parse to a JSON record; scalar or
    /// array payloads are corrupt even when syntactically valid. Missing
    /// record fields default to empty, so tokens minted by older encoders
    /// still decode.
    pub fn decode(&self) -> DecodeResult {
        let trimmed = self.0.trim();
        let bytes = match b64.decode(trimmed) {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::debug!(%error, "token is not valid base64");
                return DecodeResult::Corrupt;
            }
        };
        let json = match unescape_component(&bytes) {
            Some(json) => json,
            None => {
                tracing::debug!("token bytes did not unescape to UTF-8 text");
                return DecodeResult::Corrupt;
            }
        };
        let value: serde_json::Value = match serde_json::from_str(&json) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!(%error, "token payload is not valid JSON");
                return DecodeResult::Corrupt;
            }
        };
        if !value.is_object() {
            tracing::debug!("token payload parsed but is not a record");
            return DecodeResult::Corrupt;
        }
        match serde_json::from_value::<Creator>(value) {
            Ok(creator) => DecodeResult::Valid(creator),
            Err(error) => {
                tracing::debug!(%error, "token record does not match the profile shape");
                DecodeResult::Corrupt
            }
        }
    }

    /// Whether this is the sentinel empty token.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProfileToken {
    fn from(raw: String) -> Self {
        ProfileToken(raw)
    }
}

impl From<&str> for ProfileToken {
    fn from(raw: &str) -> Self {
        ProfileToken(raw.to_string())
    }
}

impl Display for ProfileToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Creator {
        Creator {
            id: "demo".to_string(),
            name: "Demo Creator".to_string(),
            handle: "demo".to_string(),
            upi_id: "demo@upi".to_string(),
            bio: "Open source & chai".to_string(),
            category: "Coding".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn test_round_trip() {
        let profile = sample_profile();
        let token = ProfileToken::encode(&profile);
        assert_eq!(token.decode(), DecodeResult::Valid(profile));
    }

    #[test]
    fn test_round_trip_unicode_and_reserved_characters() {
        let profile = Creator {
            id: "u1".to_string(),
            name: "अनु ☕".to_string(),
            handle: "anu".to_string(),
            upi_id: "anu@upi".to_string(),
            bio: "R&D? #chai / مرحبا ❤".to_string(),
            category: "Art".to_string(),
            avatar_url: Some("https://example.com/a.png?size=200&fmt=webp".to_string()),
        };
        let token = ProfileToken::encode(&profile);
        assert_eq!(token.decode(), DecodeResult::Valid(profile));
    }

    #[test]
    fn test_round_trip_all_empty_profile_is_valid_not_corrupt() {
        let token = ProfileToken::encode(&Creator::default());
        let decoded = token.decode();
        assert!(!decoded.is_corrupt());
        assert_eq!(decoded, DecodeResult::Valid(Creator::default()));
    }

    #[test]
    fn test_token_alphabet_is_base64() {
        let profile = Creator {
            name: "A&B?C#D ☕ אבג".to_string(),
            bio: "emoji 🫖 and ?&#%".to_string(),
            ..sample_profile()
        };
        let token = ProfileToken::encode(&profile);
        assert!(!token.is_empty());
        assert!(
            token
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='),
            "unexpected character in token: {token}"
        );
    }

    #[test]
    fn test_decode_garbage_is_corrupt() {
        assert!(ProfileToken::from("not-a-valid-token!!").decode().is_corrupt());
    }

    #[test]
    fn test_decode_truncated_token_is_corrupt() {
        let token = ProfileToken::encode(&sample_profile());
        let raw = token.as_str();
        let truncated = ProfileToken::from(&raw[..raw.len() - 3]);
        assert!(truncated.decode().is_corrupt());
    }

    #[test]
    fn test_decode_trims_incidental_whitespace() {
        let token = ProfileToken::encode(&sample_profile());
        let padded = ProfileToken::from(format!("  {}\n", token.as_str()));
        assert_eq!(padded.decode(), DecodeResult::Valid(sample_profile()));
    }

    #[test]
    fn test_decode_non_record_payload_is_corrupt() {
        // base64(encodeURIComponent("[1,2,3]")) and of "\"chai\"": syntactically
        // valid JSON, but not records.
        assert!(ProfileToken::from("JTVCMSUyQzIlMkMzJTVE").decode().is_corrupt());
        assert!(ProfileToken::from("JTIyY2hhaSUyMg==").decode().is_corrupt());
    }

    #[test]
    fn test_decodes_token_minted_by_web_client() {
        // btoa(encodeURIComponent(JSON.stringify({id:"demo",name:"Demo Creator",
        // handle:"demo",upiId:"demo@upi",bio:"Open source & chai",category:"Coding"})))
        let token = ProfileToken::from(
            "JTdCJTIyaWQlMjIlM0ElMjJkZW1vJTIyJTJDJTIybmFtZSUyMiUzQSUyMkRlbW8lMjBDcmVhdG9yJTIyJTJDJTIyaGFuZGxlJTIyJTNBJTIyZGVtbyUyMiUyQyUyMnVwaUlkJTIyJTNBJTIyZGVtbyU0MHVwaSUyMiUyQyUyMmJpbyUyMiUzQSUyMk9wZW4lMjBzb3VyY2UlMjAlMjYlMjBjaGFpJTIyJTJDJTIyY2F0ZWdvcnklMjIlM0ElMjJDb2RpbmclMjIlN0Q=",
        );
        assert_eq!(token.decode(), DecodeResult::Valid(sample_profile()));
    }

    #[test]
    fn test_encodes_byte_identical_to_web_client() {
        let token = ProfileToken::encode(&sample_profile());
        assert_eq!(
            token.as_str(),
            "JTdCJTIyaWQlMjIlM0ElMjJkZW1vJTIyJTJDJTIybmFtZSUyMiUzQSUyMkRlbW8lMjBDcmVhdG9yJTIyJTJDJTIyaGFuZGxlJTIyJTNBJTIyZGVtbyUyMiUyQyUyMnVwaUlkJTIyJTNBJTIyZGVtbyU0MHVwaSUyMiUyQyUyMmJpbyUyMiUzQSUyMk9wZW4lMjBzb3VyY2UlMjAlMjYlMjBjaGFpJTIyJTJDJTIyY2F0ZWdvcnklMjIlM0ElMjJDb2RpbmclMjIlN0Q="
        );
    }

    #[test]
    fn test_decode_record_with_missing_fields_defaults() {
        // base64(encodeURIComponent("{\"name\":\"A\"}"))
        let json = "{\"name\":\"A\"}";
        let token = ProfileToken::from(b64.encode(escape_component(json).as_bytes()));
        let decoded = token.decode().ok().expect("partial record should decode");
        assert_eq!(decoded.name, "A");
        assert_eq!(decoded.upi_id, "");
    }
}
