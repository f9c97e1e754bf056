//! Error types for REST resource operations.
//!
//! This module contains [`ApiError`], the single error type returned by every
//! endpoint operation, and [`VendorError`], the structured payload the CCV
//! Shop API returns with non-2xx responses.
//!
//! # Error Handling
//!
//! Vendor error codes are mapped to semantic variants:
//!
//! - **`405.10`**: [`ApiError::MethodNotAllowed`]
//! - **`500.24`**: [`ApiError::ResourceNotFound`]
//! - **Any other code**: [`ApiError::GenericApi`]
//!
//! An error body that is not a valid vendor payload becomes
//! [`ApiError::MalformedResponse`].
//!
//! # Example
//!
//! ```rust,ignore
//! use ccvshop_api::rest::ApiError;
//!
//! match client.webshops().get(123).await {
//!     Ok(Some(webshop)) => println!("Found: {:?}", webshop.name),
//!     Ok(None) => println!("No content"),
//!     Err(ApiError::ResourceNotFound { message, .. }) => println!("Not found: {}", message),
//!     Err(ApiError::Integrity(e)) => println!("Response rejected: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::IntegrityError;
use crate::clients::HttpError;

/// Vendor code for "method not allowed".
pub const CODE_METHOD_NOT_ALLOWED: &str = "405.10";

/// Vendor code reported for an unknown resource id.
pub const CODE_RESOURCE_NOT_FOUND: &str = "500.24";

/// Error type for REST resource operations.
///
/// Every failure is returned to the immediate caller; nothing is retried or
/// swallowed, and no partial result accompanies an error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The response failed hash validation and must not be trusted.
    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    /// A body was present but was not the JSON that was expected.
    #[error("Malformed response: {reason}")]
    MalformedResponse {
        /// The decoding failure detail.
        reason: String,
    },

    /// The vendor rejected the method for this resource (code `405.10`).
    #[error("{message}")]
    MethodNotAllowed {
        /// The vendor's developer message.
        message: String,
        /// The vendor's status.
        status: u16,
    },

    /// The requested resource does not exist (code `500.24`).
    ///
    /// The vendor reports unknown ids with an internal-server-error code;
    /// that quirk is why a 500-family code maps to "not found" here.
    #[error("{message}")]
    ResourceNotFound {
        /// The vendor's developer message.
        message: String,
        /// The vendor's status.
        status: u16,
    },

    /// Any other vendor error.
    #[error("{message}")]
    GenericApi {
        /// The vendor error code (e.g., `400.1`).
        code: String,
        /// The vendor's developer message.
        message: String,
        /// The vendor's status.
        status: u16,
    },

    /// The request data could not be serialized; nothing was sent.
    #[error("Failed to serialize request data: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    /// A resource without an id was used to address a sub-resource.
    #[error("{resource} has no id and cannot address sub-resources")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// The transport failed to obtain a response.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ApiError {
    /// Creates a [`ApiError::MalformedResponse`] from any decode failure.
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Classifies a non-2xx response body.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ccvshop_api::rest::ApiError;
    ///
    /// let error = ApiError::from_vendor_body(
    ///     br#"{"code":"405.10","developermessage":"nope","status":405}"#,
    /// );
    /// assert!(matches!(
    ///     error,
    ///     ApiError::MethodNotAllowed { ref message, status: 405 } if message == "nope"
    /// ));
    ///
    /// let error = ApiError::from_vendor_body(b"<html>Bad gateway</html>");
    /// assert!(matches!(error, ApiError::MalformedResponse { .. }));
    /// ```
    #[must_use]
    pub fn from_vendor_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<VendorError>(body) {
            Ok(vendor_error) => vendor_error.classify(),
            Err(e) => Self::malformed(format!("error body is not a vendor error: {e}")),
        }
    }

    /// Returns the vendor status for classified vendor errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::MethodNotAllowed { status, .. }
            | Self::ResourceNotFound { status, .. }
            | Self::GenericApi { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the response failed hash validation.
    #[must_use]
    pub const fn is_integrity_failure(&self) -> bool {
        matches!(self, Self::Integrity(_))
    }
}

/// The structured error payload of a non-2xx response.
///
/// ```json
/// {"code": "500.24", "developermessage": "File not found", "status": 500}
/// ```
///
/// All three fields are required; a payload missing any of them is not a
/// vendor error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorError {
    /// The vendor error code (e.g., `405.10`).
    pub code: String,
    /// Human readable message for developers.
    #[serde(rename = "developermessage")]
    pub developer_message: String,
    /// The HTTP-like status reported in the payload.
    pub status: u16,
}

impl VendorError {
    /// Maps the vendor code to a typed [`ApiError`].
    #[must_use]
    pub fn classify(self) -> ApiError {
        tracing::debug!(
            "CCV Shop API returned error {} ({}): {}",
            self.code,
            self.status,
            self.developer_message
        );

        match self.code.as_str() {
            CODE_METHOD_NOT_ALLOWED => ApiError::MethodNotAllowed {
                message: self.developer_message,
                status: self.status,
            },
            CODE_RESOURCE_NOT_FOUND => ApiError::ResourceNotFound {
                message: self.developer_message,
                status: self.status,
            },
            _ => ApiError::GenericApi {
                code: self.code,
                message: self.developer_message,
                status: self.status,
            },
        }
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};
