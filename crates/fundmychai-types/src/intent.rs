//! UPI payment-request strings.
//!
//! A [`UpiIntent`] is the string handed to wallet apps, either as a QR payload
//! or as a clickable deep link on mobile:
//!
//! ```text
//! upi://pay?pa=<address>&pn=<name>&am=<integer>&cu=INR&tn=<note>
//! ```
//!
//! The UPI scheme is an external contract consumed as-is, not redesigned here.
//! The builder only guarantees syntactic well-formedness: the payee name and
//! note are percent-escaped, the amount renders as a plain base-10 integer,
//! and degenerate inputs (empty address or name) still produce a well-formed
//! string. Whether the address is a real payment identifier is entirely the
//! receiving wallet's concern, and positivity of the amount is the caller's.

use std::fmt;
use std::fmt::Display;

use crate::escape::escape_component;
use crate::profile::Creator;

/// Fixed currency code carried by every intent.
pub const CURRENCY: &str = "INR";

/// Transaction note substituted when the visitor leaves theirs blank.
pub const DEFAULT_NOTE: &str = "Support from FundMyChai";

/// A payment-request intent in the UPI deep-link format.
///
/// Constructed fresh on every amount or message change; never cached, never
/// persisted.
///
/// # Example
///
/// ```
/// use fundmychai_types::{Creator, UpiIntent};
///
/// let creator = Creator {
///     name: "A B".to_string(),
///     upi_id: "x@bank".to_string(),
///     ..Creator::default()
/// };
/// let intent = UpiIntent::new(&creator, 150);
/// assert_eq!(
///     intent.to_uri_string(),
///     "upi://pay?pa=x@bank&pn=A%20B&am=150&cu=INR&tn=Support%20from%20FundMyChai"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpiIntent {
    payee_address: String,
    payee_name: String,
    amount: u64,
    note: Option<String>,
}

impl UpiIntent {
    /// Builds an intent requesting `amount` whole rupees for a profile.
    ///
    /// Only the payment address and display name are consumed; all other
    /// profile fields are ignored.
    pub fn new(profile: &Creator, amount: u64) -> Self {
        UpiIntent {
            payee_address: profile.upi_id.clone(),
            payee_name: profile.name.clone(),
            amount,
            note: None,
        }
    }

    /// Attaches a visitor note. A blank note is treated as absent, so the
    /// rendered string falls back to [`DEFAULT_NOTE`].
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.is_empty() { None } else { Some(note) };
        self
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn payee_address(&self) -> &str {
        &self.payee_address
    }

    /// Renders the intent string.
    ///
    /// The address is inserted literally (it is opaque data validated only by
    /// the wallet app); name and note are percent-escaped; the amount is a
    /// base-10 integer with no separators.
    pub fn to_uri_string(&self) -> String {
        let note = self.note.as_deref().unwrap_or(DEFAULT_NOTE);
        format!(
            "upi://pay?pa={}&pn={}&am={}&cu={}&tn={}",
            self.payee_address,
            escape_component(&self.payee_name),
            self.amount,
            CURRENCY,
            escape_component(note),
        )
    }
}

impl Display for UpiIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uri_string())
    }
}
