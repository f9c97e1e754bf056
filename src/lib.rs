//! # CCV Shop API Rust SDK
//!
//! A Rust SDK for the CCV Shop REST API, providing validated credentials,
//! HMAC-SHA512 request signing, response integrity validation and typed
//! resources.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Validated credentials via [`ApiCredentials`] and [`ApiCredentialsBuilder`],
//!   with environment fallback
//! - Request signing and response validation via [`auth`]
//! - An async HTTP transport over `reqwest` behind the [`Transport`] trait
//! - Resource endpoints with schema-directed hydration via [`rest`]
//! - Typed errors for every vendor failure via [`ApiError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ccvshop_api::{ApiClient, ApiCredentials, HostName, PublicKey, SecretKey};
//!
//! let credentials = ApiCredentials::builder()
//!     .host_name(HostName::new("demo.ccvshop.nl").unwrap())
//!     .public_key(PublicKey::new("your-public-key").unwrap())
//!     .secret_key(SecretKey::new("your-secret-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ApiClient::new(credentials).unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Missing values fall back to `CCVSHOP_API_HOSTNAME`, `CCVSHOP_API_PUBLIC`
//! and `CCVSHOP_API_SECRET`:
//!
//! ```rust,ignore
//! use ccvshop_api::{ApiClient, ApiCredentials};
//!
//! let client = ApiClient::new(ApiCredentials::from_env()?)?;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use ccvshop_api::rest::{ApiError, QueryFilters};
//! use serde_json::json;
//!
//! // Fetch one webshop
//! match client.webshops().get(42).await {
//!     Ok(Some(webshop)) => println!("{:?}", webshop.name),
//!     Ok(None) => println!("No content"),
//!     Err(ApiError::ResourceNotFound { message, .. }) => println!("{message}"),
//!     Err(e) => return Err(e.into()),
//! }
//!
//! // Update it
//! client.webshops().update(42, &json!({"name": "Renamed"})).await?;
//!
//! // Create credentials under it
//! let credential = client
//!     .credentials()
//!     .create_for_id(42, &json!({"name": "Connector"}))
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Credentials are instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Per-call context**: Each operation captures its own method, URI, body
//!   and timestamp, so one client serves concurrent calls
//! - **Untrusted until validated**: A 2xx body is only decoded after its
//!   `x-hash` matches

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiCredentials, ApiCredentialsBuilder, HostName, PublicKey, SecretKey};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiClient, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, RequestContext,
    Transport,
};

// Re-export REST types
pub use auth::IntegrityError;
pub use rest::{ApiError, Field, ParentReference, QueryFilters};
