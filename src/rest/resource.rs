//! The resource trait and schema-directed hydration.
//!
//! Each resource kind declares its collection path and the list of field
//! names it knows. Hydration reads exactly those keys from a decoded JSON
//! object; keys outside the schema are ignored and never materialized.
//!
//! # Implementing a Resource
//!
//! ```rust
//! use ccvshop_api::rest::{hydrate, Field, Resource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! #[serde(default)]
//! struct Category {
//!     #[serde(skip_serializing_if = "Field::is_unset")]
//!     id: Field<u64>,
//!     #[serde(skip_serializing_if = "Field::is_unset")]
//!     name: Field<String>,
//! }
//!
//! impl Resource for Category {
//!     const NAME: &'static str = "Category";
//!     const PATH: &'static str = "categories";
//!     const FIELDS: &'static [&'static str] = &["id", "name"];
//!
//!     fn id(&self) -> Option<u64> {
//!         self.id.value().copied()
//!     }
//! }
//!
//! let category: Category = hydrate(&serde_json::json!({"id": 1, "color": "red"})).unwrap();
//! assert_eq!(category.id(), Some(1));
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::rest::errors::ApiError;
use crate::rest::path::ParentReference;

/// A CCV Shop resource kind.
///
/// Implementations are plain data: all request logic lives in
/// [`Endpoint`](crate::rest::Endpoint).
pub trait Resource: Serialize + DeserializeOwned + Default + Clone + Send + Sync {
    /// The type name used in error messages (e.g., `Webshop`).
    const NAME: &'static str;

    /// The collection path under the API root (e.g., `webshops`).
    const PATH: &'static str;

    /// The JSON keys this resource knows, matching its serde field names.
    const FIELDS: &'static [&'static str];

    /// Returns the resource's id, if it was present in the response.
    fn id(&self) -> Option<u64>;

    /// Returns a reference that scopes sub-resources under this instance.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingId`] if the resource has no id.
    fn parent_reference(&self) -> Result<ParentReference, ApiError> {
        self.id()
            .map(|id| ParentReference::new(Self::PATH, id))
            .ok_or(ApiError::MissingId {
                resource: Self::NAME,
            })
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Builds a resource from a decoded JSON object.
///
/// Only keys listed in [`Resource::FIELDS`] are read. Fields absent from the
/// object stay unset.
///
/// # Errors
///
/// Returns [`ApiError::MalformedResponse`] if `decoded` is not an object or a
/// known field has a value of the wrong type.
pub fn hydrate<R: Resource>(decoded: &Value) -> Result<R, ApiError> {
    let object = decoded.as_object().ok_or_else(|| {
        ApiError::malformed(format!(
            "expected an object for {}, found {}",
            R::NAME,
            json_kind(decoded)
        ))
    })?;

    let known: Map<String, Value> = R::FIELDS
        .iter()
        .filter_map(|field| {
            object
                .get(*field)
                .map(|value| ((*field).to_string(), value.clone()))
        })
        .collect();

    serde_json::from_value(Value::Object(known))
        .map_err(|e| ApiError::malformed(format!("invalid {}: {e}", R::NAME)))
}

/// Builds a list of resources from a decoded JSON body.
///
/// A body with an `items` array yields one resource per element in order;
/// any other object yields a single resource.
///
/// # Errors
///
/// Returns [`ApiError::MalformedResponse`] if `items` is not an array or any
/// element fails [`hydrate`].
pub fn build_collection<R: Resource>(decoded: &Value) -> Result<Vec<R>, ApiError> {
    match decoded.get("items") {
        Some(Value::Array(items)) => items.iter().map(hydrate::<R>).collect(),
        None | Some(Value::Null) => Ok(vec![hydrate::<R>(decoded)?]),
        Some(other) => Err(ApiError::malformed(format!(
            "expected items to be an array, found {}",
            json_kind(other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::Field;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Gadget {
        #[serde(skip_serializing_if = "Field::is_unset")]
        id: Field<u64>,
        #[serde(skip_serializing_if = "Field::is_unset")]
        name: Field<String>,
    }

    impl Resource for Gadget {
        const NAME: &'static str = "Gadget";
        const PATH: &'static str = "gadgets";
        const FIELDS: &'static [&'static str] = &["id", "name"];

        fn id(&self) -> Option<u64> {
            self.id.value().copied()
        }
    }

    #[test]
    fn test_hydrate_assigns_known_fields() {
        let gadget: Gadget = hydrate(&json!({"id": 1, "name": "a"})).unwrap();
        assert_eq!(gadget.id, Field::Value(1));
        assert_eq!(gadget.name, Field::Value("a".to_string()));
    }

    #[test]
    fn test_hydrate_ignores_unknown_fields() {
        let gadget: Gadget = hydrate(&json!({"id": 1, "unknown": {"deep": true}})).unwrap();
        assert_eq!(gadget.id(), Some(1));
        assert!(gadget.name.is_unset());

        let serialized = serde_json::to_value(&gadget).unwrap();
        assert_eq!(serialized, json!({"id": 1}));
    }

    #[test]
    fn test_hydrate_distinguishes_null_from_absent() {
        let gadget: Gadget = hydrate(&json!({"name": null})).unwrap();
        assert!(gadget.name.is_null());
        assert!(gadget.id.is_unset());
        assert_eq!(gadget.id(), None);
    }

    #[test]
    fn test_hydrate_rejects_non_objects() {
        for value in [json!([1, 2]), json!("x"), json!(3), json!(null)] {
            let result = hydrate::<Gadget>(&value);
            assert!(matches!(result, Err(ApiError::MalformedResponse { .. })));
        }
    }

    #[test]
    fn test_hydrate_rejects_wrong_field_type() {
        let result = hydrate::<Gadget>(&json!({"id": "not-a-number"}));
        assert!(matches!(
            result,
            Err(ApiError::MalformedResponse { ref reason }) if reason.contains("Gadget")
        ));
    }

    #[test]
    fn test_build_collection_from_items_preserves_order() {
        let gadgets: Vec<Gadget> =
            build_collection(&json!({"items": [{"id": 3}, {"id": 1}, {"id": 2}]})).unwrap();
        let ids: Vec<_> = gadgets.iter().filter_map(Resource::id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_build_collection_empty_items() {
        let gadgets: Vec<Gadget> = build_collection(&json!({"items": []})).unwrap();
        assert!(gadgets.is_empty());
    }

    #[test]
    fn test_build_collection_falls_back_to_singleton() {
        let gadgets: Vec<Gadget> = build_collection(&json!({"id": 5, "name": "only"})).unwrap();
        assert_eq!(gadgets.len(), 1);
        assert_eq!(gadgets[0].id(), Some(5));
    }

    #[test]
    fn test_build_collection_rejects_non_array_items() {
        let result = build_collection::<Gadget>(&json!({"items": {"id": 1}}));
        assert!(matches!(result, Err(ApiError::MalformedResponse { .. })));
    }

    #[test]
    fn test_parent_reference_requires_id() {
        let with_id = Gadget {
            id: Field::Value(8),
            ..Gadget::default()
        };
        let parent = with_id.parent_reference().unwrap();
        assert_eq!(parent.to_string(), "gadgets/8");

        let result = Gadget::default().parent_reference();
        assert!(matches!(
            result,
            Err(ApiError::MissingId { resource: "Gadget" })
        ));
    }

    #[test]
    fn test_json_kind_names() {
        assert_eq!(json_kind(&json!([])), "an array");
        assert_eq!(json_kind(&json!(null)), "null");
    }
}
