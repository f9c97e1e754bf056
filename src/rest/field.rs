//! Tri-state resource fields.
//!
//! A hydrated resource distinguishes a field that was absent from the
//! response ([`Field::Unset`]) from one that was present but `null`
//! ([`Field::Null`]).
//!
//! Resource structs pair `Field<T>` with `#[serde(default)]` on the container
//! and `skip_serializing_if = "Field::is_unset"` on each field, so unset
//! fields are neither expected when reading nor written when serializing.
//!
//! # Example
//!
//! ```rust
//! use ccvshop_api::rest::Field;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Shop {
//!     #[serde(default)]
//!     name: Field<String>,
//!     #[serde(default)]
//!     api_root: Field<String>,
//! }
//!
//! let shop: Shop = serde_json::from_str(r#"{"api_root": null}"#).unwrap();
//! assert!(shop.name.is_unset());
//! assert!(shop.api_root.is_null());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A resource field that may be unset, explicitly null, or hold a value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// The field was not present.
    #[default]
    Unset,
    /// The field was present with a `null` value.
    Null,
    /// The field was present with a value.
    Value(T),
}

impl<T> Field<T> {
    /// Returns `true` if the field was not present.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` if the field was present with a `null` value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }

    /// Converts into an `Option`, folding unset and null into `None`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called for keys that are present
        let value = Option::<T>::deserialize(deserializer)?;
        Ok(value.map_or(Self::Null, Self::Value))
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(value) => serializer.serialize_some(value),
            Self::Unset | Self::Null => serializer.serialize_none(),
        }
    }
}
