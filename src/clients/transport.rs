//! The transport seam between the signing pipeline and the network.

use std::future::Future;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Sends one signed request and returns the raw response.
///
/// A transport performs exactly one round trip per call: no retries, no
/// redirects into other resources, no caching. Any status code, including
/// non-2xx, is a successful send; only failures to obtain a response are
/// errors.
///
/// Implementations must be safe for concurrent use, since endpoints share one
/// transport across calls.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use ccvshop_api::clients::{HttpError, HttpRequest, HttpResponse, Transport};
///
/// struct NoContent;
///
/// impl Transport for NoContent {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(204, HashMap::new(), Vec::new()))
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends the request to the webshop host.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}
