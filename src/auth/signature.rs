//! Request signing and response validation.
//!
//! Both directions hash a canonical string: five fields joined with `|` in a
//! fixed order.
//!
//! | position | request                      | response                        |
//! |----------|------------------------------|---------------------------------|
//! | 1        | public key                   | public key                      |
//! | 2        | method                       | method of the request           |
//! | 3        | URI including query          | URI of the request              |
//! | 4        | serialized JSON body or `""` | raw response body bytes         |
//! | 5        | request timestamp (`x-date`) | response's own `x-date` header  |
//!
//! The signer never reads the clock: the timestamp is passed in so the signed
//! value is the transmitted value.

use thiserror::Error;

use crate::auth::hmac::{compute_signature, constant_time_compare};
use crate::clients::{HttpMethod, HttpResponse, RequestContext, HEADER_DATE, HEADER_HASH};
use crate::config::ApiCredentials;

/// Separator between canonical string components.
pub const CANONICAL_DELIMITER: u8 = b'|';

/// A response failed integrity validation.
///
/// Always fatal for the call: the response body must not be trusted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// The recomputed hash differs from the received `x-hash` header.
    #[error("Result hash not equal")]
    HashMismatch,

    /// A header required for validation is absent.
    #[error("Result hash not equal: response is missing the '{header}' header")]
    MissingHeader {
        /// The missing header name.
        header: &'static str,
    },
}

/// Joins canonical string components with [`CANONICAL_DELIMITER`].
#[must_use]
pub fn canonical_string(parts: &[&[u8]]) -> Vec<u8> {
    let mut joined = Vec::with_capacity(parts.iter().map(|p| p.len() + 1).sum::<usize>());
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            joined.push(CANONICAL_DELIMITER);
        }
        joined.extend_from_slice(part);
    }
    joined
}

/// Signs a request.
///
/// # Example
///
/// ```rust
/// use ccvshop_api::auth::sign;
/// use ccvshop_api::clients::HttpMethod;
///
/// let uri = "/api/rest/v1/webshops";
/// let date = "2024-01-31T10:00:00+00:00";
/// let a = sign("public", HttpMethod::Get, uri, None, date, "secret");
/// let b = sign("public", HttpMethod::Get, uri, None, date, "secret");
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn sign(
    public_key: &str,
    method: HttpMethod,
    uri: &str,
    body: Option<&str>,
    timestamp: &str,
    secret_key: &str,
) -> String {
    let message = canonical_string(&[
        public_key.as_bytes(),
        method.as_str().as_bytes(),
        uri.as_bytes(),
        body.unwrap_or_default().as_bytes(),
        timestamp.as_bytes(),
    ]);
    compute_signature(&message, secret_key)
}

/// Signs a request context with the given credentials.
#[must_use]
pub fn sign_request(credentials: &ApiCredentials, context: &RequestContext) -> String {
    sign(
        credentials.public_key().as_ref(),
        context.method(),
        context.uri(),
        context.body(),
        context.timestamp(),
        credentials.secret_key().as_ref(),
    )
}

/// Validates a response hash.
///
/// # Errors
///
/// Returns [`IntegrityError::MissingHeader`] if `x-date` or `x-hash` is
/// absent and [`IntegrityError::HashMismatch`] if the hash does not match.
pub fn validate(
    public_key: &str,
    method: HttpMethod,
    uri: &str,
    response_body: &[u8],
    response_date: Option<&str>,
    response_hash: Option<&str>,
    secret_key: &str,
) -> Result<(), IntegrityError> {
    let response_date = required(response_date, HEADER_DATE)?;
    let response_hash = required(response_hash, HEADER_HASH)?;

    let message = canonical_string(&[
        public_key.as_bytes(),
        method.as_str().as_bytes(),
        uri.as_bytes(),
        response_body,
        response_date.as_bytes(),
    ]);
    let expected = compute_signature(&message, secret_key);

    if constant_time_compare(&expected, response_hash) {
        Ok(())
    } else {
        Err(IntegrityError::HashMismatch)
    }
}

fn required<'a>(value: Option<&'a str>, header: &'static str) -> Result<&'a str, IntegrityError> {
    value.ok_or(IntegrityError::MissingHeader { header })
}

/// Validates a response against the context of the request that produced it.
///
/// # Errors
///
/// See [`validate`].
pub fn validate_response(
    credentials: &ApiCredentials,
    context: &RequestContext,
    response: &HttpResponse,
) -> Result<(), IntegrityError> {
    validate(
        credentials.public_key().as_ref(),
        context.method(),
        context.uri(),
        &response.body,
        response.x_date(),
        response.x_hash(),
        credentials.secret_key().as_ref(),
    )
    .map_err(|error| {
        tracing::warn!(
            "Integrity check failed for {} {}: {}",
            context.method(),
            context.uri(),
            error
        );
        error
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC: &str = "public-key";
    const SECRET: &str = "secret-key";
    const URI: &str = "/api/rest/v1/webshops/42";
    const OTHER_URI: &str = "/api/rest/v1/webshops/43";
    const DATE: &str = "2024-01-31T10:00:00+00:00";
    const OTHER_DATE: &str = "2024-01-31T10:00:01+00:00";

    fn response_hash(body: &[u8], date: &str) -> String {
        let message = canonical_string(&[
            PUBLIC.as_bytes(),
            b"GET",
            URI.as_bytes(),
            body,
            date.as_bytes(),
        ]);
        compute_signature(&message, SECRET)
    }

    fn check(
        method: HttpMethod,
        body: &[u8],
        date: Option<&str>,
        hash: Option<&str>,
    ) -> Result<(), IntegrityError> {
        validate(PUBLIC, method, URI, body, date, hash, SECRET)
    }

    #[test]
    fn test_canonical_string_joins_with_pipe() {
        let joined = canonical_string(&[b"a", b"GET", b"/uri", b"", b"date"]);
        assert_eq!(joined, b"a|GET|/uri||date");
    }

    #[test]
    fn test_sign_is_deterministic() {
        let first = sign(PUBLIC, HttpMethod::Get, URI, None, DATE, SECRET);
        let second = sign(PUBLIC, HttpMethod::Get, URI, None, DATE, SECRET);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sign_matches_canonical_construction() {
        let body = r#"{"name":"app"}"#;
        let expected = compute_signature(
            format!("{PUBLIC}|POST|{URI}|{body}|{DATE}").as_bytes(),
            SECRET,
        );
        assert_eq!(
            sign(PUBLIC, HttpMethod::Post, URI, Some(body), DATE, SECRET),
            expected
        );
    }

    #[test]
    fn test_absent_body_signs_empty_string() {
        assert_eq!(
            sign(PUBLIC, HttpMethod::Get, URI, None, DATE, SECRET),
            sign(PUBLIC, HttpMethod::Get, URI, Some(""), DATE, SECRET)
        );
    }

    #[test]
    fn test_sign_binds_every_component() {
        let base = sign(PUBLIC, HttpMethod::Get, URI, None, DATE, SECRET);
        let variants = [
            sign("other", HttpMethod::Get, URI, None, DATE, SECRET),
            sign(PUBLIC, HttpMethod::Patch, URI, None, DATE, SECRET),
            sign(PUBLIC, HttpMethod::Get, OTHER_URI, None, DATE, SECRET),
            sign(PUBLIC, HttpMethod::Get, URI, Some("{}"), DATE, SECRET),
            sign(PUBLIC, HttpMethod::Get, URI, None, OTHER_DATE, SECRET),
            sign(PUBLIC, HttpMethod::Get, URI, None, DATE, "other-secret"),
        ];
        for variant in variants {
            assert_ne!(base, variant);
        }
    }

    #[test]
    fn test_validate_accepts_matching_hash() {
        let body = br#"{"id":42}"#;
        let hash = response_hash(body, DATE);

        let result = check(HttpMethod::Get, body, Some(DATE), Some(&hash));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_detects_any_body_byte_change() {
        let body = br#"{"id":42,"name":"shop"}"#.to_vec();
        let hash = response_hash(&body, DATE);

        for index in 0..body.len() {
            let mut tampered = body.clone();
            tampered[index] ^= 0x01;
            assert_eq!(
                check(HttpMethod::Get, &tampered, Some(DATE), Some(&hash)),
                Err(IntegrityError::HashMismatch),
                "tampering byte {index} was not detected"
            );
        }
    }

    #[test]
    fn test_validate_detects_date_change() {
        let body = br#"{"id":42}"#;
        let hash = response_hash(body, DATE);

        assert_eq!(
            check(HttpMethod::Get, body, Some(OTHER_DATE), Some(&hash)),
            Err(IntegrityError::HashMismatch)
        );
    }

    #[test]
    fn test_validate_uses_request_method() {
        let body = br#"{"id":42}"#;
        let hash = response_hash(body, DATE);

        assert_eq!(
            check(HttpMethod::Patch, body, Some(DATE), Some(&hash)),
            Err(IntegrityError::HashMismatch)
        );
    }

    #[test]
    fn test_validate_requires_headers() {
        let hash = response_hash(b"", DATE);

        assert_eq!(
            check(HttpMethod::Get, b"", None, Some(&hash)),
            Err(IntegrityError::MissingHeader { header: "x-date" })
        );
        assert_eq!(
            check(HttpMethod::Get, b"", Some(DATE), None),
            Err(IntegrityError::MissingHeader { header: "x-hash" })
        );
    }

    #[test]
    fn test_integrity_error_message() {
        assert_eq!(
            IntegrityError::HashMismatch.to_string(),
            "Result hash not equal"
        );
    }
}
