//! Error types and handling for the resource API server.
//!
//! Domain errors (not-found, invalid body) are converted to HTTP responses
//! inside the resources domain; this module covers the infrastructure
//! failures that surface at startup and in the serve loop.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure errors for the HTTP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to bind the listening socket. Fatal at startup.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The serve loop terminated with an I/O failure.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl Error {
    /// Create a bind error.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }
}
