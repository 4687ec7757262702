//! Guessable items.
//!
//! An `Item` is a film: a title plus its attribute map. The title is the
//! item's identity for rejection tracking and is not changed after
//! creation.

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, Attributes};

/// A guessable item.
///
/// Serializes as `{ "title": ..., "attributes": { name: bool, ... } }`,
/// which is also the import/export format.
///
/// ## Example
///
/// ```
/// use film_guess::items::Item;
///
/// let godfather = Item::new("The Godfather")
///     .with_attr("genre_crime")
///     .with_attr("country_US");
///
/// assert!(godfather.is_set("genre_crime"));
/// assert!(!godfather.has("genre_drama"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display title, unique within a database.
    pub title: String,

    /// Attribute presence.
    pub attributes: Attributes,
}

impl Item {
    /// Create an item with no attributes.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            attributes: Attributes::default(),
        }
    }

    /// Create an item where every named attribute is present and true.
    #[must_use]
    pub fn with_attributes<I, K>(title: impl Into<String>, attrs: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<AttributeKey>,
    {
        Self {
            title: title.into(),
            attributes: attrs.into_iter().map(|k| (k.into(), true)).collect(),
        }
    }

    /// Add a true attribute (builder pattern).
    #[must_use]
    pub fn with_attr(self, key: impl Into<AttributeKey>) -> Self {
        self.with_value(key, true)
    }

    /// Add an attribute with an explicit value (builder pattern).
    #[must_use]
    pub fn with_value(mut self, key: impl Into<AttributeKey>, value: bool) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Is the attribute key present, whatever its value?
    #[must_use]
    pub fn has(&self, attr: &str) -> bool {
        self.attributes.contains_key(attr)
    }

    /// Is the attribute present and true?
    #[must_use]
    pub fn is_set(&self, attr: &str) -> bool {
        self.attributes.get(attr).copied().unwrap_or(false)
    }

    /// Attribute keys in sorted order.
    pub fn attribute_keys(&self) -> impl Iterator<Item = &AttributeKey> {
        let mut keys: Vec<_> = self.attributes.keys().collect();
        keys.sort();
        keys.into_iter()
    }
}
