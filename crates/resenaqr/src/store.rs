//! Hosted lead persistence: one POST per lead to a Postgres REST collection
//! (`<base>/rest/v1/<table>`), authenticated with an API key. There is no
//! read path, no retry and no idempotency key; every call appends.

use bon::Builder;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use resenaqr_core::{HttpClient, Lead, LeadStore, TransportError};
use serde::Deserialize;
use url::Url;

/// Default collection name for captured leads.
pub const DEFAULT_TABLE: &str = "qr_leads";

/// Errors from the REST lead store.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum StoreError {
    /// The HTTP transport failed before a response arrived.
    #[error("{0}")]
    Transport(
        #[from]
        #[diagnostic_source]
        TransportError,
    ),

    /// The backend answered with a non-success status. When the error body
    /// carried a human-readable message it is shown verbatim.
    #[error("{}", match .message { Some(m) => m.clone(), None => format!("HTTP {}", .status) })]
    Http {
        /// Response status code.
        status: http::StatusCode,
        /// `message` field of the error body, if it could be decoded.
        message: Option<String>,
    },

    /// The lead could not be serialized.
    #[error("failed to serialize lead: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Shape of a PostgREST error body; only the message matters here.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// [`LeadStore`] writing to a hosted Postgres REST endpoint.
///
/// Generic over the [`HttpClient`] seam; production code uses
/// `reqwest::Client`, tests use queued in-memory fakes.
#[derive(Debug, Clone, Builder)]
#[builder(start_fn = new)]
pub struct RestLeadStore<C = reqwest::Client> {
    /// Transport used for the insert call.
    client: C,
    /// Base URL of the hosted backend (e.g. `https://xyz.supabase.co`).
    base_url: Url,
    /// API key, sent both as `apikey` and as a bearer token.
    #[builder(into)]
    api_key: String,
    /// Collection to append to.
    #[builder(into, default = String::from(DEFAULT_TABLE))]
    table: String,
}

impl<C> RestLeadStore<C> {
    fn endpoint(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.table
        )
    }
}

impl<C> LeadStore for RestLeadStore<C>
where
    C: HttpClient + Sync,
    C::Error: Into<TransportError>,
{
    type Error = StoreError;

    async fn insert(&self, lead: &Lead) -> Result<(), StoreError> {
        let body = serde_json::to_vec(lead)?;
        let request = http::Request::builder()
            .method(http::Method::POST)
            .uri(self.endpoint())
            .header(CONTENT_TYPE, "application/json")
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .body(body)
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let response = self
            .client
            .send_http(request)
            .await
            .map_err(|e| StoreError::Transport(e.into()))?;

        let (parts, body) = response.into_parts();
        if parts.status.is_success() {
            return Ok(());
        }
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);
        Err(StoreError::Http {
            status: parts.status,
            message,
        })
    }
}

/// [`LeadStore`] that drops leads on the floor. Used when no backend
/// credentials are configured: the QR is still the primary outcome and must
/// not depend on persistence.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardStore;

impl LeadStore for DiscardStore {
    type Error = std::convert::Infallible;

    async fn insert(&self, _lead: &Lead) -> Result<(), Self::Error> {
        Ok(())
    }
}
