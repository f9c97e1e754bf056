//! Credential resource implementation.
//!
//! Credentials are API key pairs that belong to a webshop. They are listed
//! directly under `credentials` and created under their webshop:
//!
//! ```text
//! GET  /api/rest/v1/credentials
//! GET  /api/rest/v1/credentials/{id}
//! GET  /api/rest/v1/webshops/{webshop_id}/credentials
//! POST /api/rest/v1/webshops/{webshop_id}/credentials
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{ApiClient, HttpClient, Transport};
use crate::rest::resources::Webshop;
use crate::rest::{ApiError, Endpoint, Field, ParentReference, QueryFilters, Resource};

/// An API credential of a webshop.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credential {
    /// The canonical URL of this resource.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub href: Field<String>,

    /// The unique identifier of the credential.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub id: Field<u64>,

    /// A label for the application using this credential.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,

    /// The public key.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub api_public: Field<String>,

    /// The secret key.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub api_secret: Field<String>,

    /// The id of the owning webshop.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub webshop_id: Field<u64>,
}

// Manual Debug impl to keep the secret out of logs
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_secret = match &self.api_secret {
            Field::Value(_) => "*****",
            Field::Null => "null",
            Field::Unset => "unset",
        };
        f.debug_struct("Credential")
            .field("href", &self.href)
            .field("id", &self.id)
            .field("name", &self.name)
            .field("api_public", &self.api_public)
            .field("api_secret", &api_secret)
            .field("webshop_id", &self.webshop_id)
            .finish()
    }
}

impl Resource for Credential {
    const NAME: &'static str = "Credential";
    const PATH: &'static str = "credentials";
    const FIELDS: &'static [&'static str] = &[
        "href",
        "id",
        "name",
        "api_public",
        "api_secret",
        "webshop_id",
    ];

    fn id(&self) -> Option<u64> {
        self.id.value().copied()
    }
}

/// The `credentials` endpoint.
#[derive(Debug, Clone)]
pub struct Credentials<'c, T = HttpClient> {
    endpoint: Endpoint<'c, Credential, T>,
}

impl<'c, T: Transport> Credentials<'c, T> {
    pub(crate) const fn new(client: &'c ApiClient<T>) -> Self {
        Self {
            endpoint: Endpoint::new(client),
        }
    }

    /// Fetches a credential by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ResourceNotFound`] for an unknown id.
    pub async fn get(&self, id: u64) -> Result<Option<Credential>, ApiError> {
        self.endpoint.get_one(id, &QueryFilters::new()).await
    }

    /// Lists credentials.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_all(&self, filters: &QueryFilters) -> Result<Vec<Credential>, ApiError> {
        self.endpoint.get_all(filters).await
    }

    /// Lists the credentials of a webshop.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingId`] if the webshop has no id.
    pub async fn get_all_for(&self, webshop: &Webshop) -> Result<Vec<Credential>, ApiError> {
        self.endpoint
            .with_parent(webshop.parent_reference()?)
            .get_all(&QueryFilters::new())
            .await
    }

    /// Creates a credential for a webshop.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingId`] if the webshop has no id.
    pub async fn create_for<D>(
        &self,
        webshop: &Webshop,
        data: &D,
    ) -> Result<Option<Credential>, ApiError>
    where
        D: Serialize + Sync + ?Sized,
    {
        self.endpoint
            .with_parent(webshop.parent_reference()?)
            .create(data)
            .await
    }

    /// Creates a credential for a webshop given only its id.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_for_id<D>(
        &self,
        webshop_id: u64,
        data: &D,
    ) -> Result<Option<Credential>, ApiError>
    where
        D: Serialize + Sync + ?Sized,
    {
        self.endpoint
            .with_parent(ParentReference::for_resource::<Webshop>(webshop_id))
            .create(data)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::hydrate;
    use serde_json::json;

    #[test]
    fn test_hydrate_credential() {
        let decoded = json!({
            "id": 7,
            "name": "Connector",
            "api_public": "pub",
            "api_secret": "sec",
            "webshop_id": 42
        });

        let credential: Credential = hydrate(&decoded).unwrap();

        assert_eq!(credential.id(), Some(7));
        assert_eq!(credential.webshop_id, Field::Value(42));
        assert!(credential.href.is_unset());
    }

    #[test]
    fn test_debug_masks_secret() {
        let credential = Credential {
            api_secret: Field::Value("super-secret".to_string()),
            ..Credential::default()
        };
        let debug = format!("{credential:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("*****"));
    }

    #[test]
    fn test_fields_match_serialized_keys() {
        let credential = Credential {
            href: Field::Value(String::new()),
            id: Field::Value(1),
            name: Field::Value(String::new()),
            api_public: Field::Value(String::new()),
            api_secret: Field::Value(String::new()),
            webshop_id: Field::Value(2),
        };

        let serialized = serde_json::to_value(&credential).unwrap();
        let mut keys: Vec<_> = serialized.as_object().unwrap().keys().cloned().collect();
        let mut fields: Vec<_> = Credential::FIELDS.iter().map(ToString::to_string).collect();
        keys.sort();
        fields.sort();
        assert_eq!(keys, fields);
    }
}
