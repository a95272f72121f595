//! Error types for the submission flow.

/// Generic Spanish fallback shown when an operational failure carries no
/// human-readable message of its own.
pub const GENERIC_ERROR: &str = "Hubo un error al guardar tu información";

/// Everything that can go wrong during one submission.
///
/// The two validation variants are checked before any network activity,
/// phone first. The two operational variants wrap whatever the encoder or
/// store implementation returned; their `Display` output is surfaced to the
/// user verbatim via [`SubmitError::user_message`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SubmitError {
    /// Phone field was empty after trimming.
    #[error("Por favor ingresa tu número de WhatsApp")]
    EmptyPhone,

    /// Review URL field was empty after trimming.
    #[error("Por favor ingresa el enlace de reseñas")]
    EmptyReviewUrl,

    /// The QR encoding call failed; no result is shown and persistence is
    /// never attempted.
    #[error("{0}")]
    Encode(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The persistence call failed. The already-generated image is kept.
    #[error("{0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SubmitError {
    /// The message to render inline: the error's own text when it has one,
    /// otherwise the generic fallback.
    pub fn user_message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            GENERIC_ERROR.to_string()
        } else {
            text
        }
    }

    /// Whether this is a field-validation error (as opposed to an
    /// operational one).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyPhone | Self::EmptyReviewUrl)
    }
}

/// Transport-level errors that occur during HTTP communication.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TransportError {
    /// Failed to establish a connection to the server.
    #[error("Connection error: {0}")]
    Connect(String),

    /// Request timed out.
    #[error("Request timeout")]
    Timeout,

    /// Request construction failed (malformed URI, headers, etc.).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Other transport error.
    #[error("Transport error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl From<std::convert::Infallible> for TransportError {
    fn from(e: std::convert::Infallible) -> Self {
        match e {}
    }
}

#[cfg(feature = "reqwest-client")]
impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else if e.is_builder() || e.is_request() {
            Self::InvalidRequest(e.to_string())
        } else {
            Self::Other(Box::new(e))
        }
    }
}
