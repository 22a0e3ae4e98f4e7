//! Core types for FundMyChai, a client-only creator-donation page toolkit.
//!
//! FundMyChai lets a creator publish a donation page without a backend: the
//! whole profile travels inside the shareable link itself, and the page turns
//! a visitor-chosen amount into a UPI payment-request string that wallet apps
//! consume as a QR payload or deep link.
//!
//! This crate holds the pure, stateless pieces of that flow. Nothing here
//! performs I/O, touches global state, or blocks; every function may be called
//! concurrently from any number of call sites.
//!
//! # Modules
//!
//! - [`profile`] - The [`Creator`](profile::Creator) record that a donation page describes
//! - [`codec`] - The profile-link codec: [`ProfileToken`](codec::ProfileToken) and [`DecodeResult`](codec::DecodeResult)
//! - [`link`] - The shareable-link wire format (`<base>#/c/<handle>?d=<token>`)
//! - [`intent`] - The [`UpiIntent`](intent::UpiIntent) payment-request builder
//! - [`ledger`] - Transaction and payment-flow wire types
//! - [`escape`] - Percent-escaping with the `encodeURIComponent` alphabet
//!
//! # The codec contract
//!
//! The codec is the one piece of this system with a real contract: it must
//! round-trip arbitrary profile data through a URL query value, survive
//! transcription damage without panicking, and stay byte-compatible with
//! tokens minted by the original web client. See [`codec`] for the details.

pub mod codec;
pub mod escape;
pub mod intent;
pub mod ledger;
pub mod link;
pub mod profile;

pub use codec::{DecodeResult, ProfileToken};
pub use intent::UpiIntent;
pub use link::ShareLink;
pub use profile::Creator;
