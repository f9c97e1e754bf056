//! HMAC-SHA512 primitives used for request signing and response validation.
//!
//! # Security
//!
//! All hash comparisons use constant-time comparison to prevent timing attacks.
//!
//! # Example
//!
//! ```rust
//! use ccvshop_api::auth::hmac::{compute_signature, constant_time_compare};
//!
//! let message = b"public|GET|/api/rest/v1/webshops||2024-01-31T10:00:00+00:00";
//! let signature = compute_signature(message, "secret");
//! assert_eq!(signature.len(), 128);
//! assert!(constant_time_compare(&signature, &signature.clone()));
//! ```

use hmac::{Hmac, Mac};
use sha2::Sha512;
use subtle::ConstantTimeEq;

type HmacSha512 = Hmac<Sha512>;

/// Computes an HMAC-SHA512 signature for the given message.
///
/// The signature is returned as a lowercase hexadecimal string (128 chars).
///
/// # Note
///
/// This function uses `expect()` internally but this will never panic because
/// HMAC-SHA512 accepts keys of any length.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(message: &[u8], secret: &str) -> String {
    let mut mac =
        HmacSha512::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// Performs constant-time comparison of two strings.
///
/// # Returns
///
/// `true` if the strings are equal, `false` otherwise.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    // ConstantTimeEq handles different lengths securely
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
