//! The shareable-link wire format.
//!
//! A published donation page lives at:
//!
//! ```text
//! <base-address>#/c/<handle>?d=<percent-encoded-token>
//! ```
//!
//! The `d` query parameter carries the [`ProfileToken`] and is authoritative:
//! when present it takes precedence over any locally persisted profile
//! matching the handle, which is a display hint only. The route lives in the
//! URL fragment because the original client is a hash-routed static page, and
//! keeping the format identical means links are interchangeable between the
//! two implementations.

use std::fmt;
use thiserror::Error;
use url::Url;

use crate::codec::ProfileToken;
use crate::escape::{escape_component, unescape_component};
use crate::profile::Creator;

/// Fragment route prefix for donation pages.
const PROFILE_ROUTE: &str = "c";

/// Query parameter carrying the encoded profile.
const DATA_PARAM: &str = "d";

/// Placeholder handle used while the creator has not chosen one yet.
pub const FALLBACK_HANDLE: &str = "your-page";

/// A parsed or freshly built shareable link: a handle plus an optional
/// profile token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    handle: String,
    token: Option<ProfileToken>,
}

/// Failure to interpret a URL as a donation-page link.
///
/// Note the asymmetry with the codec: link *parsing* may fail loudly because
/// the caller chose to treat a string as a link, while token *decoding* never
/// raises. A link that parses but carries a damaged token is a successful
/// parse; the damage only surfaces when the token is decoded.
#[derive(Debug, Error)]
pub enum LinkParseError {
    #[error("not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("URL has no fragment route")]
    MissingFragment,
    #[error("fragment route {0:?} is not a donation page")]
    NotProfileRoute(String),
}

impl ShareLink {
    /// Builds the link for a profile, embedding its encoded token.
    ///
    /// An empty handle falls back to [`FALLBACK_HANDLE`] so the link is
    /// always well-formed, mirroring the original publish flow.
    pub fn for_profile(profile: &Creator) -> Self {
        let handle = if profile.handle.is_empty() {
            FALLBACK_HANDLE.to_string()
        } else {
            profile.handle.clone()
        };
        ShareLink {
            handle,
            token: Some(ProfileToken::encode(profile)),
        }
    }

    /// A link carrying only a handle, as typed by a visitor.
    pub fn for_handle(handle: impl Into<String>) -> Self {
        ShareLink {
            handle: handle.into(),
            token: None,
        }
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn token(&self) -> Option<&ProfileToken> {
        self.token.as_ref()
    }

    /// Renders the full shareable URL against a base address.
    ///
    /// The token is percent-encoded into the `d` query value; `+`, `/`, and
    /// `=` from the base64 alphabet do not survive a query string unescaped.
    pub fn to_url(&self, base: &Url) -> String {
        let base = base.as_str();
        let separator = if base.ends_with('/') { "" } else { "/" };
        match &self.token {
            Some(token) => format!(
                "{base}{separator}#/{PROFILE_ROUTE}/{}?{DATA_PARAM}={}",
                self.handle,
                escape_component(token.as_str()),
            ),
            None => format!("{base}{separator}#/{PROFILE_ROUTE}/{}", self.handle),
        }
    }

    /// Parses a shareable URL back into a handle and optional token.
    ///
    /// Unknown fragment query parameters are ignored for forward
    /// compatibility. The token, when present, is *not* validated here; see
    /// [`ProfileToken::decode`].
    pub fn parse(input: &str) -> Result<Self, LinkParseError> {
        let url = Url::parse(input.trim())?;
        let fragment = url.fragment().ok_or(LinkParseError::MissingFragment)?;

        let (path, query) = match fragment.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (fragment, None),
        };

        let mut segments = path.trim_start_matches('/').splitn(2, '/');
        let route = segments.next().unwrap_or("");
        if route != PROFILE_ROUTE {
            return Err(LinkParseError::NotProfileRoute(path.to_string()));
        }
        let handle = segments
            .next()
            .and_then(|raw| unescape_component(raw.as_bytes()))
            .unwrap_or_default();

        let token = query.and_then(|query| {
            query.split('&').find_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                if name != DATA_PARAM {
                    return None;
                }
                let raw = unescape_component(value.as_bytes())?;
                Some(ProfileToken::from(raw))
            })
        });

        Ok(ShareLink { handle, token })
    }
}

impl fmt::Display for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(_) => write!(f, "/{PROFILE_ROUTE}/{}?{DATA_PARAM}=...", self.handle),
            None => write!(f, "/{PROFILE_ROUTE}/{}", self.handle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::DecodeResult;

    fn base() -> Url {
        Url::parse("https://fundmychai.app/").unwrap()
    }

    fn sample_profile() -> Creator {
        Creator {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            handle: "asha-draws".to_string(),
            upi_id: "asha@upi".to_string(),
            bio: "I draw things ☕".to_string(),
            category: "Art".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn test_build_then_parse_round_trips_profile() {
        let profile = sample_profile();
        let url = ShareLink::for_profile(&profile).to_url(&base());
        let parsed = ShareLink::parse(&url).unwrap();
        assert_eq!(parsed.handle(), "asha-draws");
        let token = parsed.token().expect("published link carries a token");
        assert_eq!(token.decode(), DecodeResult::Valid(profile));
    }

    #[test]
    fn test_url_shape() {
        let url = ShareLink::for_profile(&sample_profile()).to_url(&base());
        assert!(url.starts_with("https://fundmychai.app/#/c/asha-draws?d="));
    }

    #[test]
    fn test_base_without_trailing_slash_gets_one() {
        let base = Url::parse("https://user.github.io/repo").unwrap();
        let url = ShareLink::for_handle("asha-draws").to_url(&base);
        assert_eq!(url, "https://user.github.io/repo/#/c/asha-draws");
    }

    #[test]
    fn test_empty_handle_falls_back() {
        let profile = Creator::default();
        let link = ShareLink::for_profile(&profile);
        assert_eq!(link.handle(), "your-page");
    }

    #[test]
    fn test_parse_link_without_data_param() {
        let parsed = ShareLink::parse("https://fundmychai.app/#/c/demo").unwrap();
        assert_eq!(parsed.handle(), "demo");
        assert!(parsed.token().is_none());
    }

    #[test]
    fn test_parse_ignores_unknown_params() {
        let parsed = ShareLink::parse("https://fundmychai.app/#/c/demo?ref=tw&d=YWJj&x=1").unwrap();
        assert_eq!(parsed.token().map(|t| t.as_str()), Some("YWJj"));
    }

    #[test]
    fn test_parse_rejects_non_profile_routes() {
        assert!(matches!(
            ShareLink::parse("https://fundmychai.app/#/dashboard"),
            Err(LinkParseError::NotProfileRoute(_))
        ));
        assert!(matches!(
            ShareLink::parse("https://fundmychai.app/"),
            Err(LinkParseError::MissingFragment)
        ));
        assert!(matches!(
            ShareLink::parse("not a url at all"),
            Err(LinkParseError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_token_round_trips_through_query() {
        let minted = ShareLink::for_profile(&sample_profile());
        let expected = minted.token().unwrap().clone();
        let parsed = ShareLink::parse(&minted.to_url(&base())).unwrap();
        assert_eq!(parsed.token(), Some(&expected));
    }

    #[test]
    fn test_data_param_is_percent_decoded() {
        // '+', '/' and '=' from the base64 alphabet arrive escaped in the
        // query value and must come back literal.
        let parsed = ShareLink::parse("https://fundmychai.app/#/c/demo?d=ab%2B%2Fc%3D").unwrap();
        assert_eq!(parsed.token().map(|t| t.as_str()), Some("ab+/c="));
    }
}
