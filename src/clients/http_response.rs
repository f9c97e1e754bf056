//! HTTP response types for the CCV Shop API SDK.
//!
//! This module provides the raw [`HttpResponse`] returned by a transport.
//! The body is kept as bytes because response validation hashes the exact
//! bytes that were received.

use std::collections::HashMap;

use crate::clients::http_request::{HEADER_DATE, HEADER_HASH};

/// A raw HTTP response from the CCV Shop API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lower-case name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new response, lower-casing header names.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<Vec<u8>>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();

        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `x-hash` header value, if present.
    #[must_use]
    pub fn x_hash(&self) -> Option<&str> {
        self.header(HEADER_HASH)
    }

    /// Returns the `x-date` header value, if present.
    #[must_use]
    pub fn x_date(&self) -> Option<&str> {
        self.header(HEADER_DATE)
    }

    /// Returns `true` if the response carries a non-empty body.
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}
