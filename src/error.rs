use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) operations.
///
/// Nothing is recovered inside the client; every failure propagates to
/// the caller as one of these variants.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport failed before a response arrived (connect, DNS,
    /// timeout, or an unparseable request URL).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    ///
    /// Carries the raw response with its body unread, so callers can
    /// inspect the status, headers, and body themselves.
    #[error("server responded with {}", .0.status())]
    Status(Box<reqwest::Response>),

    /// A success response body was not valid JSON for the requested
    /// type, or a request body failed to serialize.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A header name or value is not representable as an HTTP header.
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

impl Error {
    /// The HTTP status code, when this error carries one.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status(response) => Some(response.status()),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Recovers the raw response from an [`Error::Status`] failure.
    pub fn into_response(self) -> Option<reqwest::Response> {
        match self {
            Self::Status(response) => Some(*response),
            _ => None,
        }
    }
}
