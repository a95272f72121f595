//! The QR encoding capability: a one-method trait plus the image payload it
//! produces. The bundled implementation lives in `resenaqr-qr`; tests use
//! in-memory fakes.

use std::future::Future;

use bytes::Bytes;

/// Pixel width requested for generated QR images.
pub const QR_WIDTH: u32 = 300;

/// Fixed filename offered when the image payload is saved.
pub const DOWNLOAD_FILENAME: &str = "qr-tecnomata.png";

/// A generated QR image: raw bytes plus enough metadata to display or save
/// them. Derived and disposable; it lives only in form state until reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    /// Encoded image bytes.
    pub bytes: Bytes,
    /// MIME type of `bytes` (whatever the encoder emits).
    pub mime: &'static str,
    /// Pixel width of the image.
    pub width: u32,
}

/// Capability trait for turning a URL into a scannable image payload.
#[trait_variant::make(Send)]
pub trait QrEncoder {
    /// Error type returned by the encoder.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Encode `url` into an image exactly `width` pixels wide.
    fn encode(
        &self,
        url: &str,
        width: u32,
    ) -> impl Future<Output = Result<QrImage, Self::Error>>;
}
