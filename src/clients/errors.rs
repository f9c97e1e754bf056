//! Transport error types for the CCV Shop API SDK.
//!
//! Transport failures (connection, TLS, timeouts) are surfaced unchanged to
//! the caller. They are never retried or reinterpreted by the SDK.
//!
//! # Example
//!
//! ```rust,ignore
//! use ccvshop_api::clients::HttpError;
//!
//! match client.transport().send(request).await {
//!     Ok(response) => println!("Status: {}", response.code),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//!     Err(HttpError::InvalidHeader { name }) => println!("Bad header: {}", name),
//! }
//! ```

use thiserror::Error;

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A header name or value could not be encoded for sending.
    #[error("Invalid value for header '{name}'.")]
    InvalidHeader {
        /// The header name.
        name: String,
    },
}
