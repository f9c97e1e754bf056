//! CCV Shop REST resources.
//!
//! Each resource is a plain data struct implementing
//! [`Resource`](crate::rest::Resource) plus a thin endpoint wrapper whose
//! methods are single calls into [`Endpoint`](crate::rest::Endpoint).
//!
//! | Resource       | Path                                  | Endpoint              |
//! |----------------|---------------------------------------|-----------------------|
//! | [`Webshop`]    | `webshops`                            | [`Webshops`]          |
//! | [`Credential`] | `credentials`, `webshops/{id}/credentials` | [`Credentials`]  |
//! | [`Merchant`]   | `webshops/{id}/merchant`              | [`MerchantEndpoint`]  |
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let webshop = client.webshops().get(42).await?.expect("webshop");
//! let credential = webshop
//!     .create_credentials(&client, &json!({"name": "Connector"}))
//!     .await?;
//! ```

mod credential;
mod merchant;
mod webshop;

pub use credential::{Credential, Credentials};
pub use merchant::{Merchant, MerchantEndpoint};
pub use webshop::{Webshop, Webshops};
