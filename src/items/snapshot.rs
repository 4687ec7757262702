//! Snapshot import/export and the persistence seam.
//!
//! The engine does not own storage. After every mutation it hands the
//! current items to a `SnapshotStore`; where they end up is the host's
//! business.
//!
//! ## Formats
//!
//! - JSON: an array of `{ "title", "attributes" }`, or an object wrapping
//!   that array under `"database"`
//! - Binary: `bincode` encoding of the same item list

use serde_json::Value;

use super::database::{validate, ItemDatabase};
use super::item::Item;
use crate::core::EngineError;

/// Parse a JSON snapshot into items, validating titles.
pub fn parse_json(text: &str) -> Result<Vec<Item>, EngineError> {
    let value: Value = serde_json::from_str(text)?;

    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove("database") {
            Some(inner @ Value::Array(_)) => inner,
            _ => return Err(EngineError::NotAnItemList),
        },
        _ => return Err(EngineError::NotAnItemList),
    };

    let items: Vec<Item> = serde_json::from_value(list)?;
    validate(&items)?;
    Ok(items)
}

impl ItemDatabase {
    /// Build a database from a JSON snapshot.
    pub fn from_json(text: &str) -> Result<Self, EngineError> {
        Self::from_items(parse_json(text)?)
    }

    /// Replace the contents from a JSON snapshot.
    ///
    /// On error the current contents are left untouched.
    pub fn import_json(&mut self, text: &str) -> Result<(), EngineError> {
        let items = parse_json(text)?;
        self.load(items)
    }

    /// Pretty-printed JSON array of all items.
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self.items())?)
    }

    /// Compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self.items())?)
    }

    /// Build a database from a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let items: Vec<Item> = bincode::deserialize(bytes)?;
        Self::from_items(items)
    }
}

/// Where snapshots are persisted.
///
/// Implementations must not assume anything about when they are called
/// beyond "after a mutation".
pub trait SnapshotStore: Send {
    /// Persist the current items.
    fn save(&mut self, items: &[Item]) -> Result<(), EngineError>;

    /// Load previously persisted items, if any.
    fn load(&self) -> Result<Option<Vec<Item>>, EngineError>;
}

/// In-memory store holding the last binary snapshot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    bytes: Option<Vec<u8>>,
    saves: usize,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// Raw bytes of the last snapshot.
    #[must_use]
    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, items: &[Item]) -> Result<(), EngineError> {
        self.bytes = Some(bincode::serialize(items)?);
        self.saves += 1;
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<Item>>, EngineError> {
        match &self.bytes {
            Some(bytes) => Ok(Some(bincode::deserialize(bytes)?)),
            None => Ok(None),
        }
    }
}
