//! HTTP client for CCV Shop API communication.
//!
//! This module provides [`HttpClient`], the default [`Transport`] built on
//! `reqwest` with rustls.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::ApiCredentials;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for the CCV Shop API.
///
/// The client handles:
/// - Base URI taken from the credentials' host
/// - Default headers (`User-Agent`, `Accept`)
/// - `Content-Type: application/json` when a body is present
/// - Collecting the response body as raw bytes for hash validation
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use ccvshop_api::{ApiCredentials, HostName, PublicKey, SecretKey};
/// use ccvshop_api::clients::HttpClient;
///
/// let credentials = ApiCredentials::new(
///     HostName::new("demo.ccvshop.nl").unwrap(),
///     PublicKey::new("public").unwrap(),
///     SecretKey::new("secret").unwrap(),
/// );
///
/// let client = HttpClient::new(&credentials, None).unwrap();
/// assert_eq!(client.base_uri(), "https://demo.ccvshop.nl");
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://demo.ccvshop.nl`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP transport for the given credentials.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Supplies the base host
    /// * `user_agent_prefix` - Optional prefix prepended to the `User-Agent`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(
        credentials: &ApiCredentials,
        user_agent_prefix: Option<&str>,
    ) -> Result<Self, HttpError> {
        let base_uri = credentials.host().as_ref().to_string();

        let user_agent_prefix =
            user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}CCV Shop API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Merges default, content-type and request headers into a `HeaderMap`.
    fn build_headers(&self, request: &HttpRequest) -> Result<HeaderMap, HttpError> {
        let mut merged = self.default_headers.clone();
        if request.body.is_some() {
            merged.insert("Content-Type".to_string(), "application/json".to_string());
        }
        for (key, value) in &request.headers {
            merged.insert(key.clone(), value.clone());
        }

        let mut headers = HeaderMap::with_capacity(merged.len());
        for (key, value) in merged {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| HttpError::InvalidHeader { name: key.clone() })?;
            let value = HeaderValue::from_str(&value)
                .map_err(|_| HttpError::InvalidHeader { name: key.clone() })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = format!("{}{}", self.base_uri, request.uri);
        let headers = self.build_headers(&request)?;

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        }
        .headers(headers);

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?;

        Ok(HttpResponse::new(code, res_headers, body.to_vec()))
    }
}
