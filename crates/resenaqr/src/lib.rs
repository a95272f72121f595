//! # resenaqr
//!
//! Review-request QR generation with lead capture. A business owner supplies
//! a WhatsApp number and a review link; the crate builds a click-to-chat deep
//! link carrying a pre-filled Spanish review request, renders it as a
//! scannable PNG, and appends the (phone, review link) pair to a hosted
//! collection.
//!
//! The moving parts:
//!
//! - [`LeadForm`] — the one piece of mutable state, with `submit` and `reset`
//!   handlers (re-exported from `resenaqr-core`).
//! - [`qr::PngQrEncoder`] — the bundled [`QrEncoder`] implementation
//!   (re-exported from `resenaqr-qr`).
//! - [`store::RestLeadStore`] — a [`LeadStore`] that POSTs leads to a hosted
//!   Postgres REST endpoint over the [`HttpClient`] seam, so tests can swap
//!   in an offline fake.
//!
//! ## Example
//!
//! ```rust,no_run
//! use resenaqr::store::RestLeadStore;
//! use resenaqr::{LeadForm, qr::PngQrEncoder};
//!
//! # #[tokio::main]
//! # async fn main() -> miette::Result<()> {
//! let store = RestLeadStore::new()
//!     .client(reqwest::Client::new())
//!     .base_url(url::Url::parse("https://example.supabase.co").unwrap())
//!     .api_key("anon-key")
//!     .build();
//!
//! let mut form = LeadForm::new();
//! form.set_phone("521234567890");
//! form.set_review_url("https://g.page/tu-negocio");
//! form.submit(&PngQrEncoder, &store).await;
//!
//! if let Some(qr) = form.qr() {
//!     std::fs::write(form.download_filename(), &qr.bytes).unwrap();
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Remote lead persistence over HTTP
pub mod store;

pub use resenaqr_core::*;
/// Re-export of the bundled PNG QR encoder crate
pub use resenaqr_qr as qr;
