//! REST resource infrastructure for the CCV Shop API.
//!
//! This module provides:
//!
//! - **[`Resource`] trait**: Path and field schema of a resource kind
//! - **[`Endpoint`]**: Sign, send, validate, decode and hydrate
//! - **[`Field<T>`]**: Tri-state fields distinguishing absent from `null`
//! - **Path building**: [`build_uri`], [`ParentReference`] and query filters
//! - **[`ApiError`]**: The single error type of every operation
//! - **[`resources`]**: Webshops, credentials and merchants
//!
//! # Example
//!
//! ```rust,ignore
//! use ccvshop_api::{ApiClient, ApiCredentials};
//! use ccvshop_api::rest::{ApiError, QueryFilters};
//!
//! let client = ApiClient::new(ApiCredentials::from_env()?)?;
//!
//! let mut filters = QueryFilters::new();
//! filters.insert("size".to_string(), "10".to_string());
//!
//! for webshop in client.webshops().get_all(&filters).await? {
//!     for credential in webshop.credentials(&client).await? {
//!         println!("{:?}", credential.name);
//!     }
//! }
//! ```

mod endpoint;
mod errors;
mod field;
mod path;
mod resource;
pub mod resources;

pub use endpoint::Endpoint;
pub use errors::{ApiError, VendorError, CODE_METHOD_NOT_ALLOWED, CODE_RESOURCE_NOT_FOUND};
pub use field::Field;
pub use path::{build_uri, filters_to_query, with_query, ParentReference, QueryFilters, API_PREFIX};
pub use resource::{build_collection, hydrate, Resource};
