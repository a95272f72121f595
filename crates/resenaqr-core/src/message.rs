//! The review-request message template and the WhatsApp deep-link builder.
//!
//! The deep link has the shape
//! `https://wa.me/<phone>?text=<percent-encoded UTF-8 message>`. The message
//! is a fixed Spanish template that always ends with the review URL verbatim,
//! so a client scanning the QR lands in a chat whose draft carries the link.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Base of the WhatsApp click-to-chat scheme.
pub const CHAT_BASE: &str = "https://wa.me";

/// Fixed Spanish review-request template. The review URL is appended verbatim.
pub const MESSAGE_TEMPLATE: &str = "Hola, gracias por visitarnos, espero que tu \
    experiencia haya sido de lo mejor. En el siguiente link puedes dejarnos una \
    reseña. De antemano quedamos agradecidos contigo y esperamos que vuelvas \
    pronto: ";

/// Characters escaped the way JavaScript's `encodeURIComponent` does:
/// everything except alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The full chat message for a review link, template plus URL.
pub fn review_message(review_url: &str) -> String {
    format!("{MESSAGE_TEMPLATE}{review_url}")
}

/// Build the click-to-chat deep link for a phone number and review link.
///
/// The phone is embedded verbatim, untrimmed and unvalidated. WhatsApp
/// tolerates sloppy numbers and the form's contract is intentionally lenient.
pub fn deep_link(phone: &str, review_url: &str) -> String {
    let message = review_message(review_url);
    let text = utf8_percent_encode(&message, COMPONENT);
    format!("{CHAT_BASE}/{phone}?text={text}")
}
