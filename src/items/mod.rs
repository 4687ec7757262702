//! Item system: attributes, items, the database, and snapshots.
//!
//! ## Key Types
//!
//! - `AttributeKey`: Name of a boolean attribute
//! - `Item`: A guessable film with its attribute map
//! - `ItemDatabase`: Ordered items plus the derived attribute universe
//! - `SnapshotStore`: Where the host persists the database

pub mod attributes;
pub mod database;
pub mod defaults;
pub mod item;
pub mod snapshot;

pub use attributes::{AttributeKey, Attributes};
pub use database::{DatabaseStats, ItemDatabase};
pub use defaults::default_items;
pub use item::Item;
pub use snapshot::{parse_json, MemoryStore, SnapshotStore};
