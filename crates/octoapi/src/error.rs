//! Error types for the octoapi crate.
//!
//! Every operation returns [`Result`]. A request that reaches OctoPrint but
//! comes back with a status other than the one the endpoint documents is not
//! a transport failure. It is reported as [`Error::UnexpectedStatus`], which
//! keeps the status and the raw body so callers can inspect what the server
//! said.
//!
//! # Example
//!
//! ```no_run
//! use octoapi::{Error, OctoClient};
//!
//! # async fn example() -> octoapi::Result<()> {
//! let client = OctoClient::new()?;
//!
//! match client.job().start().await {
//!     Ok(()) => println!("Job started"),
//!     Err(Error::UnexpectedStatus { status, body, .. }) if status.as_u16() == 409 => {
//!         eprintln!("Printer not ready: {}", body);
//!     }
//!     Err(Error::MissingConfig(key)) => {
//!         eprintln!("Add `{}` to ~/.octoapi.conf", key);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// The error type for OctoPrint operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// For connection issues, see [`Error::ConnectionRefused`].
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Nothing is listening at the configured URL.
    #[error("Could not connect to OctoPrint at {0}. Is the server running?")]
    ConnectionRefused(String),

    /// The server answered with a status the endpoint does not document.
    ///
    /// The raw body is kept verbatim; OctoPrint usually puts a short
    /// human-readable reason there (e.g. "Printer is not operational").
    #[error("expected status {expected}, got {status}: {body}")]
    UnexpectedStatus {
        /// The status the endpoint returns on success.
        expected: StatusCode,
        /// The status actually returned.
        status: StatusCode,
        /// The response body as text.
        body: String,
    },

    /// The response body could not be decoded as the requested JSON shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// An argument cannot be put on the wire, such as a NaN jog distance or a
    /// payload that is not a JSON object.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A composite accessor could not find its field in the response.
    #[error("field not found in response: {0}")]
    MissingField(String),

    /// A required configuration value was never provided.
    ///
    /// Loading a missing config file is not an error on its own; this is
    /// raised the first time the absent value is needed.
    #[error("missing configuration key: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration.
    ///
    /// The config file exists but is not a valid JSON object, or a value
    /// cannot be used as an HTTP header.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The config file exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for OctoPrint operations.
pub type Result<T> = std::result::Result<T, Error>;
