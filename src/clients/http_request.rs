//! HTTP request types for the CCV Shop API SDK.
//!
//! This module provides the per-call [`RequestContext`] and the signed wire
//! [`HttpRequest`] handed to a [`Transport`](crate::clients::Transport).

use std::collections::HashMap;
use std::fmt;

use chrono::{SecondsFormat, Utc};

/// Header carrying the public key in plain text.
pub const HEADER_PUBLIC: &str = "x-public";

/// Header carrying the hex HMAC-SHA512 signature.
pub const HEADER_HASH: &str = "x-hash";

/// Header carrying the ISO-8601 UTC timestamp that was signed.
pub const HEADER_DATE: &str = "x-date";

/// HTTP methods supported by the CCV Shop API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partially updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case verb as it appears in the canonical string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a single operation signs, sends and validates against.
///
/// A context is created fresh for every logical operation and never stored
/// on a long-lived endpoint. The timestamp is captured once on construction
/// and is the same value that is signed and sent in the `x-date` header.
///
/// # Example
///
/// ```rust
/// use ccvshop_api::clients::{HttpMethod, RequestContext};
///
/// let context = RequestContext::with_timestamp(
///     HttpMethod::Get,
///     "/api/rest/v1/webshops/42",
///     None,
///     "2024-01-31T10:00:00+00:00",
/// );
///
/// assert_eq!(context.method(), HttpMethod::Get);
/// assert_eq!(context.timestamp(), "2024-01-31T10:00:00+00:00");
/// assert!(context.body().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestContext {
    method: HttpMethod,
    timestamp: String,
    uri: String,
    body: Option<String>,
}

impl RequestContext {
    /// Creates a context stamped with the current UTC time.
    ///
    /// The body must already be serialized: the exact string passed here is
    /// both signed and transmitted.
    #[must_use]
    pub fn new(method: HttpMethod, uri: impl Into<String>, body: Option<String>) -> Self {
        Self::with_timestamp(method, uri, body, current_timestamp())
    }

    /// Creates a context with an explicit timestamp.
    #[must_use]
    pub fn with_timestamp(
        method: HttpMethod,
        uri: impl Into<String>,
        body: Option<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            method,
            timestamp: timestamp.into(),
            uri: uri.into(),
            body,
        }
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the timestamp that is signed and sent as `x-date`.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the request URI (path plus optional query string).
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the serialized JSON body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Formats the current UTC time as ISO-8601, e.g. `2024-01-31T10:00:00+00:00`.
#[must_use]
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// A signed request ready to be sent by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The request URI relative to the webshop host, including any query.
    pub uri: String,
    /// Request headers, including `x-public`, `x-hash` and `x-date`.
    pub headers: HashMap<String, String>,
    /// The JSON body exactly as it was signed.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Builds the wire request for a context and its signature.
    #[must_use]
    pub fn signed(context: &RequestContext, public_key: &str, signature: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert(HEADER_PUBLIC.to_string(), public_key.to_string());
        headers.insert(HEADER_HASH.to_string(), signature);
        headers.insert(HEADER_DATE.to_string(), context.timestamp().to_string());

        Self {
            method: context.method(),
            uri: context.uri().to_string(),
            headers,
            body: context.body.clone(),
        }
    }

    /// Returns a header value by (lower-case) name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
