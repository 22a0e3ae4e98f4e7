//! Optional capability ports.
//!
//! The surrounding application may or may not be able to render QR codes,
//! write to a clipboard, or open a share sheet. Those are modeled as ports
//! the host wires into [`Capabilities`]; the flows in [`crate::page`] invoke
//! a port at most once per user action when present and carry on when absent.
//! The pure core never sees any of these.

use thiserror::Error;

/// Error correction level requested from the QR renderer.
///
/// Donation pages render at [`High`](QrLevel::High) so the code stays
/// scannable with a logo punched out of the middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrLevel {
    Low,
    Medium,
    Quartile,
    High,
}

/// A capability invocation failed in the host environment.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PortError(pub String);

/// Renders an arbitrary string payload as a scannable code.
pub trait QrRenderer {
    /// Returns a host-defined rendering of `payload` (SVG text, a file path,
    /// a terminal drawing - whatever the host displays).
    fn render(&self, payload: &str, level: QrLevel) -> Result<String, PortError>;
}

/// Puts text on the host clipboard.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), PortError>;
}

/// Opens the host share sheet.
pub trait ShareSheet {
    fn share(&self, title: &str, text: &str, url: &str) -> Result<(), PortError>;
}

/// The capabilities a host application chose to provide.
#[derive(Default)]
pub struct Capabilities {
    pub qr: Option<Box<dyn QrRenderer>>,
    pub clipboard: Option<Box<dyn Clipboard>>,
    pub share: Option<Box<dyn ShareSheet>>,
}

impl Capabilities {
    /// A host providing nothing at all; every flow must still work.
    pub fn none() -> Self {
        Self::default()
    }
}
