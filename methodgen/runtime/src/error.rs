//! Runtime error types.
//!
//! - [`MethodError`] - Everything a generated `values()` or `execute()` can return
//! - [`TransportError`] - Failures of the HTTP round trip
//! - [`EncodeError`] - A list or object argument failed to encode

use thiserror::Error;

/// Errors returned by generated call objects.
///
/// Missing parameters and encode failures are detected before any network
/// I/O. `Remote` carries the remote service's own error string verbatim.
#[derive(Debug, Error)]
pub enum MethodError {
    /// A required argument was left at its empty value.
    #[error("missing required parameter {0}")]
    MissingParameter(&'static str),

    /// A list or object argument failed to encode.
    #[error("failed to encode field {field}: {source}")]
    Encode {
        field: &'static str,
        #[source]
        source: EncodeError,
    },

    /// The form submission failed.
    #[error("failed to post to {endpoint}: {source}")]
    Post {
        endpoint: &'static str,
        #[source]
        source: TransportError,
    },

    /// The envelope reported `"ok": false`.
    #[error("{0}")]
    Remote(String),

    /// The envelope reported success but carried no payload.
    #[error("response from {endpoint} is missing its {field} payload")]
    MissingPayload {
        endpoint: &'static str,
        field: &'static str,
    },
}

impl MethodError {
    /// Returns the remote error string for application-level failures.
    pub fn remote_error(&self) -> Option<&str> {
        match self {
            Self::Remote(message) => Some(message),
            _ => None,
        }
    }

    /// Returns true if the failure happened before any network I/O.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::MissingParameter(_) | Self::Encode { .. })
    }
}

/// Errors from the HTTP transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint name could not be joined onto the base URL.
    #[error("invalid URL for {endpoint}: {source}")]
    InvalidUrl {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// Server returned a non-success HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body is not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The caller's context was cancelled.
    #[error("request cancelled")]
    Cancelled,

    /// The caller's deadline passed before the response arrived.
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

/// A list or object argument could not be encoded.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct EncodeError(#[from] serde_json::Error);
