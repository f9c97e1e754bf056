//! Validated newtype wrappers for credential values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated webshop host.
///
/// The host is the base URI every request path is appended to. A bare host
/// name is normalized to `https://{host}`; an explicit `http://` scheme is
/// kept so local and test servers can be addressed.
///
/// # Example
///
/// ```rust
/// use ccvshop_api::HostName;
///
/// let host = HostName::new("demo.ccvshop.nl").unwrap();
/// assert_eq!(host.as_ref(), "https://demo.ccvshop.nl");
/// assert_eq!(host.host(), "demo.ccvshop.nl");
///
/// let host = HostName::new("http://localhost:8080/").unwrap();
/// assert_eq!(host.as_ref(), "http://localhost:8080");
/// assert_eq!(host.scheme(), "http");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostName {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostName {
    /// Creates a new validated host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHostName`] if the host is empty and
    /// [`ConfigError::InvalidHostName`] if it cannot be parsed.
    pub fn new(host: impl Into<String>) -> Result<Self, ConfigError> {
        let host = host.into();
        let host = host.trim();

        if host.is_empty() {
            return Err(ConfigError::EmptyHostName);
        }

        let url = if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{host}")
        };
        let url = url.trim_end_matches('/').to_string();

        let invalid = || ConfigError::InvalidHostName { host: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start || remainder.contains(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion without scheme, port or path.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for HostName {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A validated CCV Shop API public key.
///
/// The public key is sent in plain text in the `x-public` header and is the
/// first component of every canonical string.
///
/// # Example
///
/// ```rust
/// use ccvshop_api::PublicKey;
///
/// let key = PublicKey::new("my-public-key").unwrap();
/// assert_eq!(key.as_ref(), "my-public-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(String);

impl PublicKey {
    /// Creates a new validated public key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPublicKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyPublicKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for PublicKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated CCV Shop API secret key.
///
/// The secret is only ever used as the HMAC key. Its `Debug` output is
/// masked so it cannot leak into logs.
///
/// # Example
///
/// ```rust
/// use ccvshop_api::SecretKey;
///
/// let secret = SecretKey::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "SecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Creates a new validated secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecretKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptySecretKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for SecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(*****)")
    }
}
