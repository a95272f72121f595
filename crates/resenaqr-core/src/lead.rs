use bon::Builder;
use serde::{Deserialize, Serialize};

/// A captured lead: the phone number and review link a business owner
/// submitted.
///
/// Both fields are deliberately lenient free text. The phone is expected to
/// carry a country-code prefix and the review link is expected to be a URL,
/// but neither is checked beyond non-emptiness at submit time. Field names
/// match the remote collection's columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(start_fn = new)]
pub struct Lead {
    /// WhatsApp number, country code included (e.g. `521234567890`).
    #[builder(into)]
    pub phone: String,
    /// Review destination (Google, Yelp, etc.).
    #[builder(into)]
    pub review_url: String,
}
