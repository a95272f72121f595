//! # resenaqr-core
//!
//! Core building blocks for the review-request QR flow: the [`Lead`] record,
//! the WhatsApp deep-link builder, the capability traits for QR encoding and
//! lead persistence, and the [`LeadForm`] controller that ties them together.
//!
//! The flow is strictly linear: validate the two fields, build the deep link,
//! ask a [`QrEncoder`] for an image payload, then attempt one
//! [`LeadStore::insert`]. A persistence failure is reported but never
//! discards the already-generated image.
//!
//! ## Example
//!
//! ```rust,ignore
//! use resenaqr_core::LeadForm;
//!
//! let mut form = LeadForm::new();
//! form.set_phone("521234567890");
//! form.set_review_url("https://g.page/tu-negocio");
//! form.submit(&encoder, &store).await;
//! if let Some(qr) = form.qr() {
//!     std::fs::write(form.download_filename(), &qr.bytes)?;
//! }
//! ```

pub mod error;
pub mod form;
pub mod http_client;
pub mod lead;
pub mod message;
pub mod qr;
pub mod store;

pub use error::{SubmitError, TransportError};
pub use form::{FormState, LeadForm};
pub use http_client::HttpClient;
pub use lead::Lead;
pub use message::{CHAT_BASE, MESSAGE_TEMPLATE, deep_link, review_message};
pub use qr::{DOWNLOAD_FILENAME, QR_WIDTH, QrEncoder, QrImage};
pub use store::LeadStore;
