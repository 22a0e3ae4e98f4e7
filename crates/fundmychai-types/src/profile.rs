//! The creator profile record.
//!
//! A [`Creator`] describes the owner of a donation page. It is plain immutable
//! data at the codec boundary: the codec neither validates nor rewrites field
//! semantics, it only guarantees structural round-tripping. Whether `upi_id`
//! is a real payment address is entirely the receiving wallet app's concern.
//!
//! The wire format is camelCase JSON, field-compatible with the original web
//! client, so profiles decoded from links minted there deserialize unchanged.

use serde::{Deserialize, Serialize};

/// Avatar placeholder service used when a profile carries no avatar of its own.
const AVATAR_PLACEHOLDER_BASE: &str = "https://api.dicebear.com/7.x/initials/svg?seed=";

/// The serializable record describing a donation-page owner.
///
/// All fields are opaque strings to the codec. `handle` is expected to be
/// URL-path-safe (lowercase letters, digits, hyphens) by the editing surface
/// that produces it; nothing in this crate enforces that.
///
/// # Wire format
///
/// ```json
/// {
///   "id": "demo",
///   "name": "Demo Creator",
///   "handle": "demo",
///   "upiId": "demo@upi",
///   "bio": "Hey! I create open source projects...",
///   "category": "Coding",
///   "avatarUrl": "https://picsum.photos/200"
/// }
/// ```
///
/// Missing fields deserialize to their empty defaults so that tokens minted
/// by older encoders still decode to a usable record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Creator {
    /// Opaque identifier assigned at sign-up.
    pub id: String,
    /// Display name shown on the donation page and in the payment intent.
    pub name: String,
    /// URL-path-safe handle, shown in the shareable link.
    pub handle: String,
    /// UPI payment address (e.g. `name@bank`). Opaque here.
    pub upi_id: String,
    /// Free-text biography, intended short.
    pub bio: String,
    /// Free-text category ("Coding", "Art", ...).
    pub category: String,
    /// Avatar image reference. Absent means "use a generated placeholder".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Creator {
    /// The built-in demo profile shown when no link data and no stored
    /// profile is available.
    pub fn demo() -> Self {
        Creator {
            id: "demo".to_string(),
            name: "Demo Creator".to_string(),
            handle: "demo".to_string(),
            upi_id: "demo@upi".to_string(),
            bio: "Hey! I create open source projects and educational content. \
                  If you found my work helpful, consider buying me a chai. \
                  It helps keep the servers running!"
                .to_string(),
            category: "Coding".to_string(),
            avatar_url: Some("https://picsum.photos/200".to_string()),
        }
    }

    /// The avatar reference, falling back to a generated initials placeholder.
    pub fn avatar_or_placeholder(&self) -> String {
        match &self.avatar_url {
            Some(url) => url.clone(),
            None => format!("{AVATAR_PLACEHOLDER_BASE}{}", self.name),
        }
    }

    /// Whether the profile carries the minimum fields required to publish a
    /// donation page: name, handle, and UPI address.
    pub fn is_publishable(&self) -> bool {
        !self.name.is_empty() && !self.handle.is_empty() && !self.upi_id.is_empty()
    }
}
