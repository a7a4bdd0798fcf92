//! Async client for the Pacuare SQL-query API.
//!
//! The API speaks JSON over HTTP and authenticates every request with a
//! bearer token. This crate wraps that contract in two operations:
//!
//! - [`Client::call`] — call any endpoint, forwarding caller-supplied
//!   [`CallOptions`] to the transport with the bearer header injected.
//! - [`Client::query`] — POST a SQL statement with positional
//!   parameters to `/query` and parse the [`QueryResponse`].
//!
//! # Quick start
//!
//! ```rust,no_run
//! use pacuare::Client;
//! use serde_json::json;
//!
//! # async fn example() -> pacuare::Result<()> {
//! let client = Client::new("pk-secret")?;
//!
//! let result = client
//!     .query("SELECT id, name FROM users WHERE name = %s", vec![json!("Kit")])
//!     .await?;
//!
//! for row in &result.values {
//!     println!("{row:?}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Failures are never recovered internally: transport errors, non-2xx
//! statuses (surfaced as [`Error::Status`] carrying the raw, unread
//! response), and JSON parse failures all propagate to the caller.

mod client;
mod error;
mod options;
mod response;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use error::Error;
pub use options::CallOptions;
pub use response::QueryResponse;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;
