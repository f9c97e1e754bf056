//! Merchant resource implementation.
//!
//! The merchant is a singleton sub-resource of a webshop:
//! `GET /api/rest/v1/webshops/{webshop_id}/merchant` returns one object.

use serde::{Deserialize, Serialize};

use crate::clients::{ApiClient, HttpClient, Transport};
use crate::rest::resources::Webshop;
use crate::rest::{ApiError, Endpoint, Field, ParentReference, QueryFilters, Resource};

/// The merchant that owns a webshop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Merchant {
    /// The canonical URL of this resource.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub href: Field<String>,

    /// The unique identifier of the merchant.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub id: Field<u64>,

    /// First name of the contact person.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub first_name: Field<String>,

    /// Last name of the contact person.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub last_name: Field<String>,

    /// Contact e-mail address.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,

    /// Contact telephone number.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub telephone: Field<String>,

    /// Company name.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub company: Field<String>,
}

impl Resource for Merchant {
    const NAME: &'static str = "Merchant";
    const PATH: &'static str = "merchant";
    const FIELDS: &'static [&'static str] = &[
        "href",
        "id",
        "first_name",
        "last_name",
        "email",
        "telephone",
        "company",
    ];

    fn id(&self) -> Option<u64> {
        self.id.value().copied()
    }
}

/// The `merchant` endpoint, always scoped under a webshop.
#[derive(Debug, Clone)]
pub struct MerchantEndpoint<'c, T = HttpClient> {
    endpoint: Endpoint<'c, Merchant, T>,
}

impl<'c, T: Transport> MerchantEndpoint<'c, T> {
    pub(crate) const fn new(client: &'c ApiClient<T>) -> Self {
        Self {
            endpoint: Endpoint::new(client),
        }
    }

    /// Fetches the merchant of a webshop.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingId`] if the webshop has no id.
    pub async fn get_for(&self, webshop: &Webshop) -> Result<Option<Merchant>, ApiError> {
        self.endpoint
            .with_parent(webshop.parent_reference()?)
            .get_single(&QueryFilters::new())
            .await
    }

    /// Fetches the merchant of a webshop given only its id.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_for_id(&self, webshop_id: u64) -> Result<Option<Merchant>, ApiError> {
        self.endpoint
            .with_parent(ParentReference::for_resource::<Webshop>(webshop_id))
            .get_single(&QueryFilters::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::hydrate;
    use serde_json::json;

    #[test]
    fn test_hydrate_merchant() {
        let decoded = json!({
            "id": 3,
            "first_name": "Jan",
            "email": "jan@example.com",
            "telephone": null
        });

        let merchant: Merchant = hydrate(&decoded).unwrap();

        assert_eq!(merchant.id(), Some(3));
        assert_eq!(
            merchant.email.value().map(String::as_str),
            Some("jan@example.com")
        );
        assert!(merchant.telephone.is_null());
        assert!(merchant.company.is_unset());
    }

    #[test]
    fn test_merchant_path_is_singular() {
        assert_eq!(Merchant::PATH, "merchant");
    }
}
