//! Credential configuration for the CCV Shop API SDK.
//!
//! This module provides the credential triple every request is signed with.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiCredentials`]: The immutable (host, public key, secret key) triple
//! - [`ApiCredentialsBuilder`]: A builder with optional environment fallback
//! - [`HostName`]: A validated webshop base URI
//! - [`PublicKey`]: A validated public key
//! - [`SecretKey`]: A validated secret key with masked debug output
//!
//! # Example
//!
//! ```rust
//! use ccvshop_api::{ApiCredentials, HostName, PublicKey, SecretKey};
//!
//! let credentials = ApiCredentials::builder()
//!     .host_name(HostName::new("demo.ccvshop.nl").unwrap())
//!     .public_key(PublicKey::new("my-public-key").unwrap())
//!     .secret_key(SecretKey::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(credentials.host().as_ref(), "https://demo.ccvshop.nl");
//! ```

mod newtypes;

pub use newtypes::{HostName, PublicKey, SecretKey};

use crate::error::ConfigError;

/// Environment variable holding the webshop host.
pub const ENV_HOST_NAME: &str = "CCVSHOP_API_HOSTNAME";

/// Environment variable holding the API public key.
pub const ENV_PUBLIC_KEY: &str = "CCVSHOP_API_PUBLIC";

/// Environment variable holding the API secret key.
pub const ENV_SECRET_KEY: &str = "CCVSHOP_API_SECRET";

/// Credentials of the API connection.
///
/// `ApiCredentials` is immutable after construction and is shared read-only
/// by every endpoint of a client.
///
/// # Thread Safety
///
/// `ApiCredentials` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiCredentials {
    host: HostName,
    public_key: PublicKey,
    secret_key: SecretKey,
}

impl ApiCredentials {
    /// Creates credentials from already validated parts.
    #[must_use]
    pub const fn new(host: HostName, public_key: PublicKey, secret_key: SecretKey) -> Self {
        Self {
            host,
            public_key,
            secret_key,
        }
    }

    /// Creates a new builder for constructing `ApiCredentials`.
    #[must_use]
    pub fn builder() -> ApiCredentialsBuilder {
        ApiCredentialsBuilder::new()
    }

    /// Reads all three values from `CCVSHOP_API_HOSTNAME`,
    /// `CCVSHOP_API_PUBLIC` and `CCVSHOP_API_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironmentVariable`] if a variable is
    /// unset, or a validation error if a value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        ApiCredentialsBuilder::new().build_with_env()
    }

    /// Returns the webshop host.
    #[must_use]
    pub const fn host(&self) -> &HostName {
        &self.host
    }

    /// Returns the public key.
    #[must_use]
    pub const fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Returns the secret key.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }
}

// Verify ApiCredentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiCredentials>();
};

/// Builder for constructing [`ApiCredentials`] instances.
///
/// All three fields are required. [`build_with_env`](Self::build_with_env)
/// fills any field that was not set explicitly from the environment.
///
/// # Example
///
/// ```rust,no_run
/// use ccvshop_api::{ApiCredentials, HostName};
///
/// // Host is explicit, keys come from CCVSHOP_API_PUBLIC / CCVSHOP_API_SECRET
/// let credentials = ApiCredentials::builder()
///     .host_name(HostName::new("demo.ccvshop.nl").unwrap())
///     .build_with_env()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ApiCredentialsBuilder {
    host: Option<HostName>,
    public_key: Option<PublicKey>,
    secret_key: Option<SecretKey>,
}

impl ApiCredentialsBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the webshop host (required).
    #[must_use]
    pub fn host_name(mut self, host: HostName) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the public key (required).
    #[must_use]
    pub fn public_key(mut self, key: PublicKey) -> Self {
        self.public_key = Some(key);
        self
    }

    /// Sets the secret key (required).
    #[must_use]
    pub fn secret_key(mut self, key: SecretKey) -> Self {
        self.secret_key = Some(key);
        self
    }

    /// Builds the [`ApiCredentials`], validating that all fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] for the first unset field.
    pub fn build(self) -> Result<ApiCredentials, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host_name" })?;
        let public_key = self
            .public_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "public_key",
            })?;
        let secret_key = self
            .secret_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "secret_key",
            })?;

        Ok(ApiCredentials::new(host, public_key, secret_key))
    }

    /// Builds the [`ApiCredentials`], reading unset fields from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironmentVariable`] if a fallback
    /// variable is needed but unset, or a validation error for its value.
    pub fn build_with_env(self) -> Result<ApiCredentials, ConfigError> {
        self.build_with_lookup(|name| std::env::var(name).ok())
    }

    fn build_with_lookup<F>(self, lookup: F) -> Result<ApiCredentials, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let read = |name: &'static str| {
            lookup(name).ok_or(ConfigError::MissingEnvironmentVariable { name })
        };

        let host = match self.host {
            Some(host) => host,
            None => HostName::new(read(ENV_HOST_NAME)?)?,
        };
        let public_key = match self.public_key {
            Some(key) => key,
            None => PublicKey::new(read(ENV_PUBLIC_KEY)?)?,
        };
        let secret_key = match self.secret_key {
            Some(key) => key,
            None => SecretKey::new(read(ENV_SECRET_KEY)?)?,
        };

        Ok(ApiCredentials::new(host, public_key, secret_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, (*v).to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_builder_requires_host_name() {
        let result = ApiCredentialsBuilder::new()
            .public_key(PublicKey::new("public").unwrap())
            .secret_key(SecretKey::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "host_name" })
        ));
    }

    #[test]
    fn test_builder_requires_secret_key() {
        let result = ApiCredentialsBuilder::new()
            .host_name(HostName::new("demo.ccvshop.nl").unwrap())
            .public_key(PublicKey::new("public").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "secret_key"
            })
        ));
    }

    #[test]
    fn test_builder_with_all_fields() {
        let credentials = ApiCredentials::builder()
            .host_name(HostName::new("demo.ccvshop.nl").unwrap())
            .public_key(PublicKey::new("public").unwrap())
            .secret_key(SecretKey::new("secret").unwrap())
            .build()
            .unwrap();

        assert_eq!(credentials.host().as_ref(), "https://demo.ccvshop.nl");
        assert_eq!(credentials.public_key().as_ref(), "public");
        assert_eq!(credentials.secret_key().as_ref(), "secret");
    }

    #[test]
    fn test_environment_fills_unset_fields_only() {
        let lookup = env(&[
            (ENV_HOST_NAME, "env.ccvshop.nl"),
            (ENV_PUBLIC_KEY, "env-public"),
            (ENV_SECRET_KEY, "env-secret"),
        ]);

        let credentials = ApiCredentialsBuilder::new()
            .public_key(PublicKey::new("explicit-public").unwrap())
            .build_with_lookup(lookup)
            .unwrap();

        assert_eq!(credentials.host().as_ref(), "https://env.ccvshop.nl");
        assert_eq!(credentials.public_key().as_ref(), "explicit-public");
        assert_eq!(credentials.secret_key().as_ref(), "env-secret");
    }

    #[test]
    fn test_missing_environment_variable_is_reported() {
        let lookup = env(&[(ENV_HOST_NAME, "env.ccvshop.nl")]);

        let result = ApiCredentialsBuilder::new().build_with_lookup(lookup);

        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvironmentVariable {
                name: ENV_PUBLIC_KEY
            })
        ));
    }

    #[test]
    fn test_invalid_environment_value_is_validated() {
        let lookup = env(&[
            (ENV_HOST_NAME, "env.ccvshop.nl"),
            (ENV_PUBLIC_KEY, ""),
            (ENV_SECRET_KEY, "env-secret"),
        ]);

        let result = ApiCredentialsBuilder::new().build_with_lookup(lookup);

        assert!(matches!(result, Err(ConfigError::EmptyPublicKey)));
    }

    #[test]
    fn test_credentials_debug_masks_secret() {
        let credentials = ApiCredentials::new(
            HostName::new("demo.ccvshop.nl").unwrap(),
            PublicKey::new("public").unwrap(),
            SecretKey::new("very-secret").unwrap(),
        );

        let debug_output = format!("{credentials:?}");
        assert!(!debug_output.contains("very-secret"));
        assert!(debug_output.contains("SecretKey(*****)"));
    }
}
