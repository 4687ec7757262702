//! Item attribute system.
//!
//! Items carry named boolean attributes like "genre_crime" or
//! "director_Coppola". The engine doesn't interpret the names; it only
//! compares presence across items.
//!
//! Two kinds of absence exist and are kept distinct:
//! - key missing: the item lacks the attribute
//! - key present with `false`: the item has the attribute, valued "no"
//!
//! For entropy both read as "no". Scoring treats them differently.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Name of an attribute.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&AttributeKey> for AttributeKey {
    fn from(key: &AttributeKey) -> Self {
        key.clone()
    }
}

impl std::borrow::Borrow<str> for AttributeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An item's attribute map.
pub type Attributes = FxHashMap<AttributeKey, bool>;
