//! The device **capabilities** the profile session relies on.
//!
//! Each trait is a narrow port to a platform service (camera, barcode
//! detection, link opening, sharing). Nothing in this crate implements
//! them: front-ends provide adapters and tests provide fakes.
//!
//! **Architectural Note:**
//! The session only ever talks to these traits, never to a concrete device,
//! so the same flow runs against a terminal, a phone or an in-memory fake.

use async_trait::async_trait;
use bodyscale_common::error::CapabilityResult;

/// Location of a captured photo, as handed back by the camera.
pub type PhotoUri = String;

#[async_trait]
pub trait Camera: Send {
    /// Asks the user for camera access. Returns whether it was granted.
    async fn request_permission(&mut self) -> bool;

    /// Takes a picture and returns where it was stored.
    async fn capture(&mut self) -> CapabilityResult<PhotoUri>;
}

/// A stream of decoded QR payloads.
///
/// Decoding happens inside the source; this side only sees the text.
#[async_trait]
pub trait BarcodeSource: Send {
    /// Waits for the next detected payload. `None` once the source is closed.
    async fn next_detection(&mut self) -> Option<String>;
}

#[async_trait]
pub trait UrlOpener: Send {
    async fn open(&mut self, url: &str) -> CapabilityResult<()>;
}

#[async_trait]
pub trait PhotoSharer: Send {
    async fn share(&mut self, uri: &str) -> CapabilityResult<()>;
}
