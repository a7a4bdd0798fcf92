//! Request execution with tracing instrumentation.
//!
//! This module provides the [`Client`] struct for issuing authenticated
//! requests against the Pacuare API, and the typed [`Client::query`]
//! helper for the `/query` endpoint.

use std::time::Duration;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, Span};

use crate::error::Error;
use crate::options::CallOptions;
use crate::response::QueryResponse;

/// Base URL of the production Pacuare API.
pub const DEFAULT_BASE_URL: &str = "https://api.pacuare.dev/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring a [`Client`].
#[derive(Debug)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    transport: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Creates a new builder with the specified API key.
    fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            transport: None,
        }
    }

    /// Overrides the base URL.
    ///
    /// The value is used exactly as given: request URLs are formed by
    /// appending the call path to it with no slash normalization, and
    /// no well-formedness check happens until a request is sent.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout on the default transport.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = Client::builder("pk-secret")
    ///     .timeout(Duration::from_secs(60))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Supplies the transport directly instead of building the default
    /// one.
    ///
    /// Useful for tests and for callers that manage their own reqwest
    /// configuration. A supplied transport bypasses
    /// [`timeout`](Self::timeout) and the default cookie store.
    pub fn transport(mut self, transport: reqwest::Client) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the [`Client`].
    ///
    /// Performs no I/O and no validation of the key or base URL;
    /// malformed values surface only when a call is made.
    ///
    /// ## Errors
    ///
    /// Returns an error if the default transport cannot be constructed.
    pub fn build(self) -> Result<Client, Error> {
        let http = match self.transport {
            Some(http) => http,
            // The cookie store makes the client retain cookies set by
            // the API and replay them on every later request.
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .cookie_store(true)
                .build()?,
        };

        Ok(Client {
            http,
            api_key: self.api_key,
            base_url: self.base_url,
        })
    }
}

/// Async client for the Pacuare API.
///
/// Holds the bearer credential and base URL; every call is an
/// independent single-shot request with no shared mutable state, so one
/// client can serve any number of concurrent calls.
///
/// ## Examples
///
/// ```rust,no_run
/// use pacuare::Client;
/// use serde_json::json;
///
/// # async fn example() -> pacuare::Result<()> {
/// let client = Client::new("pk-secret")?;
///
/// let result = client
///     .query("SELECT id FROM users WHERE name = %s", vec![json!("Kit")])
///     .await?;
/// println!("{} rows", result.values.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    /// Creates a new builder for configuring a client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key.into())
    }

    /// Creates a client for the production API with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the default transport cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::builder(api_key).build()
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Calls an API endpoint, forwarding the supplied options to an
    /// authenticated request.
    ///
    /// `path` is appended to the base URL exactly as given. Caller
    /// headers are sent as supplied except `Authorization`, which is
    /// always replaced with the client's bearer token.
    ///
    /// The success body is parsed as JSON into `T` with no further
    /// validation: any body that happens to deserialize into `T` is
    /// returned as-is (trusted deserialization).
    ///
    /// ## Errors
    ///
    /// - [`Error::Transport`] if the request fails before a response
    ///   arrives.
    /// - [`Error::Status`] if the server answers with a non-success
    ///   status; the raw response is carried with its body unread.
    /// - [`Error::Json`] if a success body is not valid JSON for `T`.
    #[instrument(
        name = "api_request",
        skip(self, path, options),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn call<T>(&self, path: &str, options: CallOptions) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let CallOptions {
            method,
            mut headers,
            body,
        } = options;

        // Inserted after the caller's headers so it wins on conflict.
        let bearer = HeaderValue::try_from(format!("Bearer {}", self.api_key))
            .map_err(|e| Error::InvalidHeader(format!("invalid api key: {e}")))?;
        headers.insert(AUTHORIZATION, bearer);

        Span::current().record("http.method", method.as_str());
        let url = format!("{}{}", self.base_url, path);
        Span::current().record("http.url", url.as_str());

        let mut request = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());
        debug!(status = status.as_u16(), "response received");

        if !status.is_success() {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            return Err(Error::Status(Box::new(response)));
        }

        Span::current().record("otel.status_code", "OK");

        let body = response.bytes().await?;
        let parsed = serde_json::from_slice(&body)?;

        Ok(parsed)
    }

    /// Queries the Pacuare database.
    ///
    /// Issues a POST to `/query` with JSON body
    /// `{"query": ..., "params": [...]}`. Parameters are denoted in the
    /// query text with Psycopg-style `%s` placeholders and substituted
    /// server-side, in order; the client does not inspect, count, or
    /// escape them.
    ///
    /// ## Errors
    ///
    /// Inherits every failure mode of [`call`](Self::call).
    pub async fn query(&self, query: &str, params: Vec<Value>) -> Result<QueryResponse, Error> {
        let options = CallOptions::post().json(&QueryRequest { query, params })?;
        self.call("/query", options).await
    }
}

/// Body of a `/query` request.
#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    params: Vec<Value>,
}
