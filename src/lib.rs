//! FundMyChai application layer.
//!
//! Everything a creator's dashboard and a visitor's donation page need around
//! the pure core in [`fundmychai_types`]: a local-storage-style key-value
//! store, the session flag, the mock transaction ledger, the bio-generation
//! client, and the capability ports (QR rendering, clipboard, share sheet)
//! that a surrounding application may or may not provide.
//!
//! There is deliberately no backend anywhere in here. "Login" is a flag in
//! the store, the ledger is mock or manually entered data, and a published
//! profile persists nowhere but inside the shareable link itself.
//!
//! # Modules
//!
//! - [`store`] - The injected key-value store port and its implementations
//! - [`session`] - The local-storage-backed authentication flag
//! - [`ledger`] - Transaction history over the store, seeded with mock data
//! - [`bio`] - The bio-generation port and its Gemini-backed implementation
//! - [`page`] - Donation-page profile resolution and the payment flow
//! - [`ports`] - Optional capability ports (QR renderer, clipboard, share sheet)
//! - [`cli`] - The `fundmychai` command-line binary
//! - [`telemetry`] - Tracing subscriber setup

pub mod bio;
pub mod cli;
pub mod ledger;
pub mod page;
pub mod ports;
pub mod session;
pub mod store;
pub mod telemetry;
