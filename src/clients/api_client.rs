//! The client session for the CCV Shop API.
//!
//! [`ApiClient`] owns the credentials and the transport. Endpoints borrow it,
//! so any number of endpoints can be created and used concurrently.

use crate::clients::errors::HttpError;
use crate::clients::http_client::HttpClient;
use crate::clients::transport::Transport;
use crate::config::ApiCredentials;
use crate::rest::resources::{Credentials, MerchantEndpoint, Webshops};
use crate::rest::{Endpoint, Resource};

/// A CCV Shop API client.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync` for any [`Transport`]; share it by reference
/// or behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use ccvshop_api::{ApiClient, ApiCredentials, HostName, PublicKey, SecretKey};
///
/// let credentials = ApiCredentials::new(
///     HostName::new("demo.ccvshop.nl").unwrap(),
///     PublicKey::new("public").unwrap(),
///     SecretKey::new("secret").unwrap(),
/// );
/// let client = ApiClient::new(credentials).unwrap();
///
/// assert_eq!(client.api_credentials().host().as_ref(), "https://demo.ccvshop.nl");
/// ```
#[derive(Debug)]
pub struct ApiClient<T = HttpClient> {
    credentials: ApiCredentials,
    transport: T,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient<HttpClient> {
    /// Creates a client using the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(credentials: ApiCredentials) -> Result<Self, HttpError> {
        let transport = HttpClient::new(&credentials, None)?;
        Ok(Self::with_transport(credentials, transport))
    }

    /// Creates a client whose `User-Agent` starts with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn with_user_agent_prefix(
        credentials: ApiCredentials,
        prefix: &str,
    ) -> Result<Self, HttpError> {
        let transport = HttpClient::new(&credentials, Some(prefix))?;
        Ok(Self::with_transport(credentials, transport))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client over a custom transport.
    #[must_use]
    pub const fn with_transport(credentials: ApiCredentials, transport: T) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// Returns the credentials used to sign and validate.
    #[must_use]
    pub const fn api_credentials(&self) -> &ApiCredentials {
        &self.credentials
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns an unscoped endpoint for any resource kind.
    #[must_use]
    pub const fn endpoint<R: Resource>(&self) -> Endpoint<'_, R, T> {
        Endpoint::new(self)
    }

    /// Returns the `webshops` endpoint.
    #[must_use]
    pub const fn webshops(&self) -> Webshops<'_, T> {
        Webshops::new(self)
    }

    /// Returns the `credentials` endpoint.
    #[must_use]
    pub const fn credentials(&self) -> Credentials<'_, T> {
        Credentials::new(self)
    }

    /// Returns the `merchant` endpoint.
    #[must_use]
    pub const fn merchant(&self) -> MerchantEndpoint<'_, T> {
        MerchantEndpoint::new(self)
    }
}
