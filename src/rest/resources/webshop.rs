//! Webshop resource implementation.
//!
//! This module provides the [`Webshop`] resource and the [`Webshops`]
//! endpoint. A webshop is also the parent of its [`Credential`]s and its
//! [`Merchant`].
//!
//! # Example
//!
//! ```rust,ignore
//! use ccvshop_api::rest::QueryFilters;
//!
//! let webshops = client.webshops().get_all(&QueryFilters::new()).await?;
//! for webshop in &webshops {
//!     let merchant = webshop.merchant(&client).await?;
//!     println!("{:?}: {:?}", webshop.name, merchant.map(|m| m.email));
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{ApiClient, HttpClient, Transport};
use crate::rest::resources::{Credential, Merchant};
use crate::rest::{ApiError, Endpoint, Field, QueryFilters, Resource};

/// A CCV Shop webshop.
///
/// A multishop system hosts several webshops under one account; product
/// limits apply per webshop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webshop {
    /// The canonical URL of this resource.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub href: Field<String>,

    /// The unique identifier of the webshop.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub id: Field<u64>,

    /// The webshop name.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,

    /// Whether this webshop belongs to a multishop system.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub is_multishop_system: Field<bool>,

    /// The maximum number of products.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub product_limit: Field<i64>,

    /// The number of products that can still be added.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub product_limit_left: Field<i64>,

    /// The API root URL for this webshop.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub api_root: Field<String>,
}

impl Resource for Webshop {
    const NAME: &'static str = "Webshop";
    const PATH: &'static str = "webshops";
    const FIELDS: &'static [&'static str] = &[
        "href",
        "id",
        "name",
        "is_multishop_system",
        "product_limit",
        "product_limit_left",
        "api_root",
    ];

    fn id(&self) -> Option<u64> {
        self.id.value().copied()
    }
}

impl Webshop {
    /// Fetches the credentials of this webshop.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingId`] without sending a request if this
    /// webshop has no id.
    pub async fn credentials<T: Transport>(
        &self,
        client: &ApiClient<T>,
    ) -> Result<Vec<Credential>, ApiError> {
        client.credentials().get_all_for(self).await
    }

    /// Creates a credential for this webshop.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingId`] without sending a request if this
    /// webshop has no id.
    pub async fn create_credentials<T, D>(
        &self,
        client: &ApiClient<T>,
        data: &D,
    ) -> Result<Option<Credential>, ApiError>
    where
        T: Transport,
        D: Serialize + Sync + ?Sized,
    {
        client.credentials().create_for(self, data).await
    }

    /// Fetches the merchant that owns this webshop.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingId`] without sending a request if this
    /// webshop has no id.
    pub async fn merchant<T: Transport>(
        &self,
        client: &ApiClient<T>,
    ) -> Result<Option<Merchant>, ApiError> {
        client.merchant().get_for(self).await
    }
}

/// The `webshops` endpoint.
#[derive(Debug, Clone)]
pub struct Webshops<'c, T = HttpClient> {
    endpoint: Endpoint<'c, Webshop, T>,
}

impl<'c, T: Transport> Webshops<'c, T> {
    pub(crate) const fn new(client: &'c ApiClient<T>) -> Self {
        Self {
            endpoint: Endpoint::new(client),
        }
    }

    /// Fetches a webshop by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] for an unknown id.
    pub async fn get(&self, id: u64) -> Result<Option<Webshop>, ApiError> {
        self.endpoint.get_one(id, &QueryFilters::new()).await
    }

    /// Lists webshops.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_all(&self, filters: &QueryFilters) -> Result<Vec<Webshop>, ApiError> {
        self.endpoint.get_all(filters).await
    }

    /// Updates a webshop.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update<D>(&self, id: u64, data: &D) -> Result<(), ApiError>
    where
        D: Serialize + Sync + ?Sized,
    {
        self.endpoint.update(id, data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::hydrate;
    use serde_json::json;

    #[test]
    fn test_fields_match_serialized_keys() {
        let webshop = Webshop {
            href: Field::Value("https://demo.ccvshop.nl/api/rest/v1/webshops/1".to_string()),
            id: Field::Value(1),
            name: Field::Value("Demo".to_string()),
            is_multishop_system: Field::Value(false),
            product_limit: Field::Value(100),
            product_limit_left: Field::Value(40),
            api_root: Field::Value("https://demo.ccvshop.nl".to_string()),
        };

        let serialized = serde_json::to_value(&webshop).unwrap();
        let mut keys: Vec<_> = serialized.as_object().unwrap().keys().cloned().collect();
        let mut fields: Vec<_> = Webshop::FIELDS.iter().map(ToString::to_string).collect();
        keys.sort();
        fields.sort();
        assert_eq!(keys, fields);
    }

    #[test]
    fn test_hydrate_webshop() {
        let decoded = json!({
            "href": "https://demo.ccvshop.nl/api/rest/v1/webshops/1",
            "id": 1,
            "name": "Demo",
            "is_multishop_system": true,
            "product_limit": 250,
            "product_limit_left": null,
            "unknown_field": "ignored"
        });

        let webshop: Webshop = hydrate(&decoded).unwrap();

        assert_eq!(webshop.id(), Some(1));
        assert_eq!(webshop.is_multishop_system, Field::Value(true));
        assert_eq!(webshop.product_limit, Field::Value(250));
        assert!(webshop.product_limit_left.is_null());
        assert!(webshop.api_root.is_unset());
    }

    #[test]
    fn test_webshop_parent_reference() {
        let webshop = Webshop {
            id: Field::Value(42),
            ..Webshop::default()
        };
        let parent = webshop.parent_reference().unwrap();
        assert_eq!(parent.to_string(), "webshops/42");
    }
}
