//! Percent-escaping with the `encodeURIComponent` alphabet.
//!
//! The profile codec and the share-link format both escape text exactly the
//! way JavaScript's `encodeURIComponent` does, so that tokens minted here are
//! byte-identical to tokens minted by the original web client. That function
//! leaves ASCII alphanumerics and `- _ . ! ~ * ' ( )` untouched and escapes
//! everything else, including each byte of a multi-byte UTF-8 sequence.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, utf8_percent_encode};

/// The set of bytes escaped by `encodeURIComponent`.
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-escapes `input` with the [`COMPONENT`] alphabet.
///
/// The result is pure ASCII: non-ASCII input is encoded as UTF-8 first and
/// each byte escaped individually, matching `encodeURIComponent`.
pub fn escape_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Reverses percent-escaping, yielding the decoded text.
///
/// Returns `None` when the decoded bytes are not valid UTF-8. Stray `%` signs
/// that do not introduce a valid escape are passed through literally, the same
/// way browsers treat them.
pub fn unescape_component(input: &[u8]) -> Option<String> {
    percent_decode(input).decode_utf8().ok().map(|s| s.into_owned())
}
