//! Pass-through request options.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;

use crate::error::Error;

/// Options forwarded to the transport for a single
/// [`Client::call`](crate::Client::call).
///
/// Method, headers, and body travel to the wire unchanged, except that
/// the client inserts its own `Authorization` header after these — the
/// injected header wins on conflict.
///
/// ## Examples
///
/// ```rust
/// use pacuare::CallOptions;
/// use serde_json::json;
///
/// # fn example() -> pacuare::Result<()> {
/// let options = CallOptions::post()
///     .header("X-Request-Id", "abc-123")?
///     .json(&json!({"query": "SELECT 1", "params": []}))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct CallOptions {
    pub(crate) method: Method,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Vec<u8>>,
}

impl CallOptions {
    /// GET with no headers and no body.
    pub fn new() -> Self {
        Self::default()
    }

    /// POST with no headers and no body.
    pub fn post() -> Self {
        Self::new().method(Method::POST)
    }

    /// Sets the request method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Adds a header, replacing any previous value for the same name.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, Error> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::InvalidHeader(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::InvalidHeader(format!("invalid header value: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Sets a raw request body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `body` as the JSON request body and sets
    /// `Content-Type: application/json`.
    ///
    /// ## Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, Error> {
        self.body = Some(serde_json::to_vec(body)?);
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(self)
    }
}
