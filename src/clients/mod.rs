//! HTTP plumbing for CCV Shop API communication.
//!
//! This module provides the per-call request context, the wire request and
//! response types, the [`Transport`] seam and its default `reqwest`
//! implementation.
//!
//! # Overview
//!
//! - [`RequestContext`]: Method, timestamp, URI and body of one operation
//! - [`HttpRequest`]: A signed request handed to a transport
//! - [`HttpResponse`]: The raw status, headers and body bytes
//! - [`Transport`]: Sends one request, returns one response
//! - [`HttpClient`]: The default transport over `reqwest` with rustls
//! - [`ApiClient`]: The client session owning credentials and transport
//!
//! # Example
//!
//! ```rust,ignore
//! use ccvshop_api::{ApiClient, ApiCredentials};
//!
//! let client = ApiClient::new(ApiCredentials::from_env()?)?;
//! let webshop = client.webshops().get(42).await?;
//! ```

mod api_client;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use api_client::ApiClient;
pub use errors::HttpError;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    current_timestamp, HttpMethod, HttpRequest, RequestContext, HEADER_DATE, HEADER_HASH,
    HEADER_PUBLIC,
};
pub use http_response::HttpResponse;
pub use transport::Transport;
