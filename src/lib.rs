//! # film-guess
//!
//! An attribute-scoring engine for "guess the film" games.
//!
//! The player thinks of a film; the engine asks yes/no questions about
//! attributes ("is it a crime film?") on a five-point scale, ranks the films
//! in its database against the answers, and decides when it knows enough
//! to guess.
//!
//! ## Design Principles
//!
//! 1. **Explicit sessions**: Per-game state lives in a `SessionState` passed
//!    by reference. No global state; sessions never share mutable data.
//!
//! 2. **Deterministic**: Same database and same answers give the same
//!    questions and the same ranking.
//!
//! 3. **Storage-agnostic**: The engine accepts an item list and hands
//!    snapshots to a `SnapshotStore`. It performs no I/O itself.
//!
//! ## Algorithms
//!
//! - **Question selection**: Entropy of each attribute's split over the
//!   live items, plus a bonus for co-occurring with confirmed attributes.
//!
//! - **Scoring**: Weighted similarity between answers and item attributes,
//!   plus a bonus per confirmed attribute, clamped to `[0, 1]`.
//!
//! - **Guess-readiness**: Threshold rules on meaningful answers, leader
//!   score and candidate count.
//!
//! ## Modules
//!
//! - `core`: Answers, sessions, configuration, errors
//! - `items`: Attributes, items, the database, snapshots
//! - `engine`: Gain, selection, scoring, guess-readiness, `GuessEngine`
//! - `game`: Round flow (ask, answer, guess, shortlist)

pub mod core;
pub mod engine;
pub mod game;
pub mod items;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{AnswerValue, EngineConfig, EngineError, GuessThresholds, SessionState};

pub use crate::items::{
    AttributeKey, Attributes, DatabaseStats, Item, ItemDatabase, MemoryStore, SnapshotStore,
};

pub use crate::engine::{
    choose_best_question, filter_items, information_gain, should_make_guess, top_candidates,
    GuessEngine, ScoredItem,
};

pub use crate::game::{Candidate, GameRound, Turn};
