//! The donation page: profile resolution and the payment flow.
//!
//! A visitor opening a shareable link sees a page for exactly one profile,
//! found by this precedence:
//!
//! 1. The link's `d` token, when present. It is authoritative; a token that
//!    fails to decode is user-facing corruption, never silently replaced with
//!    a default (that would show a stranger's donation page under a false
//!    identity).
//! 2. The locally stored profile, when its handle matches the link (or the
//!    link uses the `demo` handle - the creator previewing their own page).
//! 3. The built-in demo profile.
//!
//! [`DonationPage`] then tracks what the visitor picked and renders the
//! payment intent fresh on every change.

use thiserror::Error;

use fundmychai_types::ledger::{PaymentState, PaymentStatus};
use fundmychai_types::{Creator, ShareLink, UpiIntent};

use crate::ports::{Capabilities, QrLevel};
use crate::session;
use crate::store::KeyValueStore;

/// One chai in whole rupees.
pub const CHAI_PRICE_INR: u64 = 50;

/// Amount preselected when the page opens.
pub const DEFAULT_AMOUNT_INR: u64 = 100;

/// The handle under which a creator previews their own stored profile.
const PREVIEW_HANDLE: &str = "demo";

/// Why a donation page could not be shown.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    /// The link carried a `d` token that does not decode.
    #[error("The profile link seems to be invalid or corrupted.")]
    CorruptLink,
}

/// Resolves the profile a link points at. See the module docs for the
/// precedence rules.
pub fn resolve_profile(
    link: &ShareLink,
    store: &dyn KeyValueStore,
) -> Result<Creator, PageError> {
    if let Some(token) = link.token() {
        return token.decode().ok().ok_or(PageError::CorruptLink);
    }
    if let Some(stored) = session::load_profile(store) {
        if stored.handle == link.handle() || link.handle() == PREVIEW_HANDLE {
            return Ok(stored);
        }
        tracing::debug!(
            handle = link.handle(),
            "stored profile does not match link handle, showing demo"
        );
    }
    Ok(Creator::demo())
}

/// What the visitor picked on the amount row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountChoice {
    /// A number of chais at [`CHAI_PRICE_INR`] each.
    Chai(u64),
    /// A custom whole-rupee amount.
    Custom(u64),
}

impl AmountChoice {
    pub fn amount_inr(&self) -> u64 {
        match self {
            AmountChoice::Chai(count) => count * CHAI_PRICE_INR,
            AmountChoice::Custom(amount) => *amount,
        }
    }
}

/// Result of asking the page for a scannable code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrView {
    /// The UPI intent string; on mobile also the deep link.
    pub payload: String,
    /// Host rendering of the payload, when a QR capability is present and
    /// succeeded.
    pub rendering: Option<String>,
}

/// How a share request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the host share sheet.
    Shared,
    /// Fell back to copying the URL to the clipboard.
    Copied,
    /// No capability available; the caller shows the URL instead.
    Unavailable,
}

/// One visitor's donation page session.
#[derive(Debug, Clone)]
pub struct DonationPage {
    creator: Creator,
    amount: AmountChoice,
    from_name: String,
    message: String,
    status: PaymentStatus,
}

impl DonationPage {
    pub fn new(creator: Creator) -> Self {
        DonationPage {
            creator,
            amount: AmountChoice::Custom(DEFAULT_AMOUNT_INR),
            from_name: String::new(),
            message: String::new(),
            status: PaymentStatus::Idle,
        }
    }

    pub fn creator(&self) -> &Creator {
        &self.creator
    }

    pub fn amount_inr(&self) -> u64 {
        self.amount.amount_inr()
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    /// Picks a chai multiple. Any previously shown code becomes stale.
    pub fn select_chai(&mut self, count: u64) {
        self.amount = AmountChoice::Chai(count);
        self.status = PaymentStatus::Idle;
    }

    /// Enters a custom amount, deselecting the chai row.
    pub fn select_custom(&mut self, amount: u64) {
        self.amount = AmountChoice::Custom(amount);
        self.status = PaymentStatus::Idle;
    }

    pub fn set_from_name(&mut self, from_name: impl Into<String>) {
        self.from_name = from_name.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.status = PaymentStatus::Idle;
    }

    /// The payment intent for the current amount and message. Built fresh on
    /// every call, never cached.
    pub fn intent(&self) -> UpiIntent {
        UpiIntent::new(&self.creator, self.amount_inr()).with_note(self.message.clone())
    }

    /// Produces the scannable code for the current selection, advancing the
    /// flow to `ReadyToPay`.
    ///
    /// A failing QR capability is logged and treated like an absent one; the
    /// payload is always returned so the caller can fall back to showing the
    /// deep link.
    pub fn request_qr(&mut self, capabilities: &Capabilities) -> QrView {
        self.status = PaymentStatus::GeneratingQr;
        let payload = self.intent().to_uri_string();
        let rendering = capabilities.qr.as_ref().and_then(|renderer| {
            match renderer.render(&payload, QrLevel::High) {
                Ok(rendering) => Some(rendering),
                Err(error) => {
                    tracing::warn!(%error, "QR capability failed, showing deep link only");
                    None
                }
            }
        });
        self.status = PaymentStatus::ReadyToPay;
        QrView { payload, rendering }
    }

    /// Marks the flow successful after the visitor confirms they paid.
    pub fn confirm_paid(&mut self) -> PaymentState {
        self.status = PaymentStatus::Success;
        PaymentState {
            amount: self.amount_inr(),
            message: self.message.clone(),
            from_name: self.from_name.clone(),
        }
    }

    /// Shares the page URL: share sheet first, clipboard as fallback.
    pub fn share(&self, capabilities: &Capabilities, url: &str) -> ShareOutcome {
        let title = format!("Buy {} a Chai", self.creator.name);
        let text = format!("Support {} on FundMyChai!", self.creator.name);
        if let Some(sheet) = &capabilities.share {
            match sheet.share(&title, &text, url) {
                Ok(()) => return ShareOutcome::Shared,
                Err(error) => {
                    tracing::warn!(%error, "share sheet failed, trying clipboard");
                }
            }
        }
        if let Some(clipboard) = &capabilities.clipboard {
            if clipboard.copy(url).is_ok() {
                return ShareOutcome::Copied;
            }
        }
        ShareOutcome::Unavailable
    }
}
