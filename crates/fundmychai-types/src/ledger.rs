//! Transaction and payment-flow wire types.
//!
//! There is no real transaction ledger anywhere in FundMyChai: entries are
//! mock data or manually recorded by the creator. These types only pin down
//! the wire format so the stored history stays compatible with the original
//! client's local storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single (mock or manually entered) support entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub from_name: String,
    /// Whole rupees, no minor units.
    pub amount: u64,
    pub message: String,
    /// Serialized RFC 3339, matching the original's ISO string.
    pub date: DateTime<Utc>,
    pub status: TransactionStatus,
}

/// Settlement state of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Success,
    Pending,
}

/// What a visitor has filled in on the donation page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentState {
    /// Whole rupees.
    pub amount: u64,
    pub message: String,
    pub from_name: String,
}

/// Progress of the donation-page payment flow.
///
/// The flow only ever moves forward: amount selection resets it to `Idle`,
/// requesting the code passes through `GeneratingQr` to `ReadyToPay`, and a
/// (manually confirmed) payment lands on `Success`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Idle,
    GeneratingQr,
    ReadyToPay,
    Success,
}
