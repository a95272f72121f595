//! The form controller: all mutable state of the flow lives in one
//! [`LeadForm`] owned by whoever renders it, mutated only through its own
//! handlers.
//!
//! State machine: `Idle → Submitting → { Ready | Idle(error, fields kept) }`,
//! with `reset` returning to the initial `Idle` from anywhere. `Ready` and an
//! error are not mutually exclusive: a persistence failure after a successful
//! encoding leaves both the image and the error set.

use crate::error::SubmitError;
use crate::lead::Lead;
use crate::message::deep_link;
use crate::qr::{DOWNLOAD_FILENAME, QR_WIDTH, QrEncoder, QrImage};
use crate::store::LeadStore;

/// Observable phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Showing the two input fields (possibly with an inline error).
    Idle,
    /// A submission is in flight; the submit control is disabled.
    Submitting,
    /// An image payload exists and the result view is shown.
    Ready,
}

/// Form state and submit/reset handlers for the review-QR flow.
#[derive(Debug)]
pub struct LeadForm {
    phone: String,
    review_url: String,
    qr: Option<QrImage>,
    error: Option<SubmitError>,
    saved: bool,
    submitting: bool,
    qr_width: u32,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            phone: String::new(),
            review_url: String::new(),
            qr: None,
            error: None,
            saved: false,
            submitting: false,
            qr_width: QR_WIDTH,
        }
    }
}

impl LeadForm {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the phone field.
    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    /// Set the review URL field.
    pub fn set_review_url(&mut self, review_url: impl Into<String>) {
        self.review_url = review_url.into();
    }

    /// Current phone field contents.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Current review URL field contents.
    pub fn review_url(&self) -> &str {
        &self.review_url
    }

    /// Current phase.
    pub fn state(&self) -> FormState {
        if self.submitting {
            FormState::Submitting
        } else if self.qr.is_some() {
            FormState::Ready
        } else {
            FormState::Idle
        }
    }

    /// The generated image payload, if any.
    pub fn qr(&self) -> Option<&QrImage> {
        self.qr.as_ref()
    }

    /// Inline error to render, if any.
    pub fn error(&self) -> Option<&SubmitError> {
        self.error.as_ref()
    }

    /// Whether the last submission's persistence call succeeded.
    pub fn saved(&self) -> bool {
        self.saved
    }

    /// Whether a submission is in flight (busy flag; disables the submit
    /// control).
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Filename to offer when saving the image payload.
    pub fn download_filename(&self) -> &'static str {
        DOWNLOAD_FILENAME
    }

    /// Pixel width requested from the encoder ([`QR_WIDTH`] by default).
    pub fn qr_width(&self) -> u32 {
        self.qr_width
    }

    /// Override the pixel width requested from the encoder. Configuration,
    /// not form data: it survives [`LeadForm::reset`].
    pub fn set_qr_width(&mut self, width: u32) {
        self.qr_width = width;
    }

    /// Run one submission: validate, build the deep link, encode, persist.
    ///
    /// Validation happens before any capability call, phone first. An
    /// encoding failure aborts before persistence. A persistence failure is
    /// recorded but the image stays. No retry, no timeout: a hung capability
    /// call hangs the submission, guarded only by the busy flag.
    pub async fn submit<E, S>(&mut self, encoder: &E, store: &S)
    where
        E: QrEncoder + Sync,
        S: LeadStore + Sync,
    {
        if self.submitting {
            return;
        }
        self.error = None;
        self.saved = false;
        self.submitting = true;

        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("lead_form_submit", phone = %self.phone).entered();

        if self.phone.trim().is_empty() {
            self.error = Some(SubmitError::EmptyPhone);
            self.submitting = false;
            return;
        }
        if self.review_url.trim().is_empty() {
            self.error = Some(SubmitError::EmptyReviewUrl);
            self.submitting = false;
            return;
        }

        let link = deep_link(&self.phone, &self.review_url);
        match encoder.encode(&link, self.qr_width).await {
            Ok(image) => self.qr = Some(image),
            Err(e) => {
                self.error = Some(SubmitError::Encode(Box::new(e)));
                self.submitting = false;
                return;
            }
        }

        let lead = Lead::new()
            .phone(self.phone.clone())
            .review_url(self.review_url.clone())
            .build();
        match store.insert(&lead).await {
            Ok(()) => self.saved = true,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("lead persistence failed: {e}");
                self.error = Some(SubmitError::Store(Box::new(e)));
            }
        }
        self.submitting = false;
    }

    /// Clear the image, both fields, the error and the saved flag, returning
    /// exactly to the initial empty form. Idempotent, no I/O.
    pub fn reset(&mut self) {
        self.qr = None;
        self.phone.clear();
        self.review_url.clear();
        self.error = None;
        self.saved = false;
    }
}
