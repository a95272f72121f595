//! PNG implementation of the [`QrEncoder`] capability.
//!
//! Renders the deep link into a QR matrix, scales it to the requested pixel
//! width and serializes it as PNG. The module grid renders at whole pixels
//! per module, so the buffer is nearest-neighbor resampled down to the exact
//! width, the same way the canvas-based generators honor their `width`
//! option.

use std::io::Cursor;

use base64::Engine;
use bytes::Bytes;
use image::imageops::FilterType;
use image::{ImageBuffer, ImageFormat, Luma};
use qrcode::QrCode;

pub use resenaqr_core::qr::{QrEncoder, QrImage};

/// Errors from QR generation.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum QrError {
    /// The payload could not be encoded as a QR matrix (usually: too long).
    #[error("failed to encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// PNG serialization failed.
    #[error("failed to render QR image: {0}")]
    Render(#[from] image::ImageError),
}

/// QR encoder producing PNG payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngQrEncoder;

impl PngQrEncoder {
    /// Synchronous encoding core; the trait method just wraps this.
    fn encode_png(url: &str, width: u32) -> Result<QrImage, QrError> {
        let code = QrCode::new(url.as_bytes())?;
        let mut img: ImageBuffer<Luma<u8>, Vec<u8>> = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .min_dimensions(width, width)
            .build();
        if img.width() != width || img.height() != width {
            img = image::imageops::resize(&img, width, width, FilterType::Nearest);
        }

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

        Ok(QrImage {
            bytes: Bytes::from(bytes),
            mime: "image/png",
            width,
        })
    }
}

impl QrEncoder for PngQrEncoder {
    type Error = QrError;

    async fn encode(&self, url: &str, width: u32) -> Result<QrImage, QrError> {
        Self::encode_png(url, width)
    }
}

/// Render an image payload as a `data:` URL for inline display.
pub fn data_url(image: &QrImage) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(&image.bytes);
    format!("data:{};base64,{}", image.mime, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resenaqr_core::message::deep_link;
    use resenaqr_core::qr::QR_WIDTH;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[tokio::test]
    async fn encodes_a_deep_link_as_png() {
        let link = deep_link("521234567890", "https://g.page/tu-negocio");
        let image = PngQrEncoder.encode(&link, QR_WIDTH).await.unwrap();

        assert_eq!(image.mime, "image/png");
        assert_eq!(image.width, QR_WIDTH);
        assert!(image.bytes.starts_with(PNG_MAGIC));
    }

    #[tokio::test]
    async fn rendered_pixels_match_the_requested_width_exactly() {
        // The module grid alone would land above 300 for this payload; the
        // resample step must bring it back to the request.
        let link = deep_link("521234567890", "https://g.page/tu-negocio");
        let image = PngQrEncoder.encode(&link, QR_WIDTH).await.unwrap();

        let decoded = image::load_from_memory(&image.bytes).unwrap();
        assert_eq!(decoded.width(), QR_WIDTH);
        assert_eq!(decoded.height(), QR_WIDTH);
    }

    #[tokio::test]
    async fn rejects_oversized_payloads() {
        // QR version 40 tops out below 3 KiB of binary data.
        let huge = "x".repeat(8_000);
        let err = PngQrEncoder.encode(&huge, QR_WIDTH).await.unwrap_err();
        assert!(matches!(err, QrError::Encode(_)));
    }

    #[test]
    fn data_url_has_the_png_prefix() {
        let image = QrImage {
            bytes: Bytes::from_static(b"abc"),
            mime: "image/png",
            width: 300,
        };
        assert_eq!(data_url(&image), "data:image/png;base64,YWJj");
    }
}
