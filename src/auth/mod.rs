//! Request authentication for the CCV Shop API SDK.
//!
//! Every request carries three headers: `x-public` (the public key),
//! `x-date` (an ISO-8601 UTC timestamp) and `x-hash` (an HMAC-SHA512 over the
//! canonical string, keyed with the secret). Every successful response carries
//! its own `x-date` and `x-hash`, which are recomputed and compared before the
//! body is trusted.
//!
//! # Overview
//!
//! - [`hmac`]: HMAC-SHA512 hex signatures and constant-time comparison
//! - [`sign`] / [`sign_request`]: Request signing
//! - [`validate`] / [`validate_response`]: Response validation
//! - [`IntegrityError`]: Returned when a response fails validation
//!
//! # Example
//!
//! ```rust
//! use ccvshop_api::auth::{sign, validate, canonical_string, hmac::compute_signature};
//! use ccvshop_api::clients::HttpMethod;
//!
//! let uri = "/api/rest/v1/webshops/42";
//! let date = "2024-01-31T10:00:00+00:00";
//! let x_hash = sign("public", HttpMethod::Get, uri, None, date, "secret");
//! assert_eq!(x_hash.len(), 128);
//!
//! // A response is validated against its own body and x-date header
//! let body = br#"{"id":42}"#;
//! let response_hash = compute_signature(
//!     &canonical_string(&[b"public", b"GET", uri.as_bytes(), body, date.as_bytes()]),
//!     "secret",
//! );
//! let result = validate(
//!     "public",
//!     HttpMethod::Get,
//!     uri,
//!     body,
//!     Some(date),
//!     Some(&response_hash),
//!     "secret",
//! );
//! assert!(result.is_ok());
//! ```

pub mod hmac;
mod signature;

pub use signature::{
    canonical_string, sign, sign_request, validate, validate_response, IntegrityError,
    CANONICAL_DELIMITER,
};
