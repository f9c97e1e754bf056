//! Error types for the CCV Shop API SDK.
//!
//! This module contains the configuration error type used when building
//! [`ApiCredentials`](crate::ApiCredentials).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use ccvshop_api::{PublicKey, ConfigError};
//!
//! let result = PublicKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyPublicKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Host name cannot be empty.
    #[error("Host name cannot be empty. Please provide the webshop host, e.g. 'https://demo.ccvshop.nl'.")]
    EmptyHostName,

    /// Host name is invalid.
    #[error("Invalid host name '{host}'. Expected 'host', 'https://host' or 'http://host:port'.")]
    InvalidHostName {
        /// The invalid host that was provided.
        host: String,
    },

    /// Public key cannot be empty.
    #[error("Public key cannot be empty. Please provide a valid CCV Shop API public key.")]
    EmptyPublicKey,

    /// Secret key cannot be empty.
    #[error("Secret key cannot be empty. Please provide a valid CCV Shop API secret key.")]
    EmptySecretKey,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the credentials.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// An environment variable used as fallback is not set.
    #[error("Environment variable '{name}' is not set and no explicit value was provided.")]
    MissingEnvironmentVariable {
        /// The name of the environment variable.
        name: &'static str,
    },
}
