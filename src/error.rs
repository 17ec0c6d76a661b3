//! Error types for the Voyager client.
//!
//! Structural failures (`NotFound`, `MalformedPayload`, `MissingIdentifier`)
//! abort a resolve call. Field-level anomalies never show up here: they are
//! absorbed inside [`crate::wire`] and degrade to empty values.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, VoyagerError>;

/// Raised while building request variables or URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// A scalar the endpoint cannot work without was absent or empty.
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    /// A caller value meant to be written verbatim contains characters
    /// outside `[A-Za-z0-9_.~:-]`.
    #[error("invalid token '{token}' for '{field}'")]
    InvalidToken { field: String, token: String },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Error)]
pub enum VoyagerError {
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// No anchor entity matched the requested identifier. Expected for
    /// typos and private profiles.
    #[error("no entity matching '{identifier}' in payload")]
    NotFound { identifier: String },

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// A resolved entity ended up without its primary identifier.
    #[error("resolved entity has no primary identifier ({context})")]
    MissingIdentifier { context: String },

    #[error("authentication credentials (li_at, csrf token) are missing")]
    AuthMissing,

    #[error("unauthorized: status {status}, body: {body}")]
    Unauthorized { status: u16, body: String },

    #[error("rate limited: status {status}, body: {body}")]
    RateLimited { status: u16, body: String },

    #[error("request failed{}: {message}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    RequestFailed { status: Option<u16>, message: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl VoyagerError {
    /// `true` for outcomes the caller should treat as a normal "no result".
    pub fn is_not_found(&self) -> bool {
        matches!(self, VoyagerError::NotFound { .. })
    }
}
