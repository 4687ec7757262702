//! Errors surfaced at the engine's load and persistence boundaries.
//!
//! Scoring and question selection never fail: an empty database is a normal
//! outcome (no question, no candidates), not an error.

/// Engine error type.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("snapshot is not valid item JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot must be an array of items or an object with a `database` array")]
    NotAnItemList,

    #[error("item {index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("duplicate item title: {0:?}")]
    DuplicateTitle(String),

    #[error("binary snapshot error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("snapshot store failure: {0}")]
    Store(String),

    #[error("no question is waiting for an answer")]
    NoPendingQuestion,
}
