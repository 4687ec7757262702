//! Item database and its attribute universe.
//!
//! `ItemDatabase` stores the guessable items in insertion order and keeps
//! the attribute universe (every attribute name used by any item) in sync.
//! The universe is recomputed synchronously on every mutation, so it always
//! equals the union of all items' attribute keys.

use std::collections::BTreeSet;

use log::info;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::attributes::AttributeKey;
use super::item::Item;
use crate::core::EngineError;

/// Counts shown on an admin screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseStats {
    /// Number of items.
    pub items: usize,
    /// Number of distinct attributes.
    pub attributes: usize,
}

/// Ordered collection of items.
///
/// ## Example
///
/// ```
/// use film_guess::items::ItemDatabase;
///
/// let mut db = ItemDatabase::new();
/// db.add("Titanic", ["ship", "disaster"]).unwrap();
/// db.add("The Godfather", ["mafia"]).unwrap();
///
/// let names: Vec<_> = db.attributes().iter().map(|a| a.as_str()).collect();
/// assert_eq!(names, vec!["disaster", "mafia", "ship"]);
///
/// assert!(db.delete(0));
/// assert_eq!(db.attributes().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemDatabase {
    items: Vec<Item>,
    universe: Vec<AttributeKey>,
}

impl ItemDatabase {
    /// Create an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a database from items, validating them first.
    pub fn from_items(items: Vec<Item>) -> Result<Self, EngineError> {
        let mut db = Self::new();
        db.load(items)?;
        Ok(db)
    }

    /// Replace the contents with `items`.
    ///
    /// Titles are trimmed, then the input is validated in full; on error
    /// the current contents are left untouched.
    pub fn load(&mut self, mut items: Vec<Item>) -> Result<(), EngineError> {
        for item in &mut items {
            let trimmed = item.title.trim();
            if trimmed.len() != item.title.len() {
                item.title = trimmed.to_string();
            }
        }
        validate(&items)?;
        self.items = items;
        self.rebuild_universe();
        info!(
            "Loaded {} items with {} attributes",
            self.items.len(),
            self.universe.len()
        );
        Ok(())
    }

    /// Append an item whose named attributes are all true.
    ///
    /// The title is trimmed. Returns the new item's index.
    pub fn add<I, K>(&mut self, title: &str, attrs: I) -> Result<usize, EngineError>
    where
        I: IntoIterator<Item = K>,
        K: Into<AttributeKey>,
    {
        let title = title.trim();
        if title.is_empty() {
            return Err(EngineError::EmptyTitle {
                index: self.items.len(),
            });
        }
        if self.find(title).is_some() {
            return Err(EngineError::DuplicateTitle(title.to_string()));
        }

        let item = Item::with_attributes(title, attrs);
        info!("Added item {:?} with {} attributes", item.title, item.attributes.len());
        self.items.push(item);
        self.rebuild_universe();
        Ok(self.items.len() - 1)
    }

    /// Remove the item at `index`.
    ///
    /// Returns `false` and changes nothing if the index is out of bounds.
    pub fn delete(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        let removed = self.items.remove(index);
        self.rebuild_universe();
        info!("Deleted item {:?}", removed.title);
        true
    }

    /// Get an item by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Find an item by exact title.
    #[must_use]
    pub fn find(&self, title: &str) -> Option<(usize, &Item)> {
        self.items
            .iter()
            .enumerate()
            .find(|(_, item)| item.title == title)
    }

    /// Items whose title contains `term`, ignoring case.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = (usize, &'a Item)> + 'a {
        let needle = term.trim().to_lowercase();
        self.items
            .iter()
            .enumerate()
            .filter(move |(_, item)| item.title.to_lowercase().contains(&needle))
    }

    /// All items in database order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterate over items in database order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// The attribute universe, sorted by name.
    #[must_use]
    pub fn attributes(&self) -> &[AttributeKey] {
        &self.universe
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Is the database empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item and attribute counts.
    #[must_use]
    pub fn stats(&self) -> DatabaseStats {
        DatabaseStats {
            items: self.items.len(),
            attributes: self.universe.len(),
        }
    }

    /// Owned copy of the items for an external store.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn rebuild_universe(&mut self) {
        let universe: BTreeSet<&AttributeKey> = self
            .items
            .iter()
            .flat_map(|item| item.attributes.keys())
            .collect();
        self.universe = universe.into_iter().cloned().collect();
    }
}

/// Check titles are non-blank and unique once trimmed.
pub(crate) fn validate(items: &[Item]) -> Result<(), EngineError> {
    let mut seen = FxHashSet::default();
    for (index, item) in items.iter().enumerate() {
        let title = item.title.trim();
        if title.is_empty() {
            return Err(EngineError::EmptyTitle { index });
        }
        if !seen.insert(title) {
            return Err(EngineError::DuplicateTitle(title.to_string()));
        }
    }
    Ok(())
}
