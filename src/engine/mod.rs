//! The guessing engine.
//!
//! The algorithms are free functions over an `ItemDatabase` and a
//! `SessionState`, so a host can run several sessions against one database.
//! `GuessEngine` bundles a database, a config, an optional snapshot store
//! and a single `GameRound` for hosts that only ever play one game at a time.

pub mod decision;
pub mod gain;
pub mod scoring;
pub mod selection;

pub use decision::should_make_guess;
pub use gain::{attribute_value, information_gain, live_items};
pub use scoring::{filter_items, live_count, score_item, top_candidates, ScoredItem};
pub use selection::{choose_best_question, correlation_score};

use log::{debug, info, warn};

use crate::core::{AnswerValue, EngineConfig, EngineError, SessionState};
use crate::game::{GameRound, Turn};
use crate::items::{AttributeKey, DatabaseStats, Item, ItemDatabase, SnapshotStore};

/// Database, configuration, persistence and one game round.
///
/// ## Example
///
/// ```
/// use film_guess::{AnswerValue, GuessEngine, Item};
///
/// let mut engine = GuessEngine::new();
/// engine.load(vec![
///     Item::with_attributes("The Godfather", ["country_US", "genre_crime"]),
///     Item::with_attributes("Titanic", ["country_US", "genre_drama"]),
/// ]).unwrap();
///
/// engine.record_answer("genre_crime", AnswerValue::Yes);
///
/// let ranked = engine.filter_items();
/// assert_eq!(ranked[0].title(), "The Godfather");
/// assert!(ranked[0].score > ranked[1].score);
/// ```
pub struct GuessEngine {
    database: ItemDatabase,
    config: EngineConfig,
    round: GameRound,
    store: Option<Box<dyn SnapshotStore>>,
}

impl Default for GuessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GuessEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuessEngine")
            .field("database", &self.database)
            .field("config", &self.config)
            .field("round", &self.round)
            .field("store", &self.store.is_some())
            .finish()
    }
}

impl GuessEngine {
    /// Engine with an empty database and default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_database(ItemDatabase::new())
    }

    /// Engine over an existing database.
    #[must_use]
    pub fn with_database(database: ItemDatabase) -> Self {
        Self {
            database,
            config: EngineConfig::default(),
            round: GameRound::new(),
            store: None,
        }
    }

    /// Engine backed by a store.
    ///
    /// Loads the store's snapshot if it has one, otherwise starts from the
    /// bundled defaults and saves them.
    pub fn open(store: Box<dyn SnapshotStore>) -> Result<Self, EngineError> {
        let snapshot = store.load()?;
        let mut engine = Self::new();
        engine.store = Some(store);

        match snapshot {
            Some(items) => {
                engine.database.load(items)?;
                info!("Opened stored database with {} items", engine.database.len());
            }
            None => engine.reset_to_defaults(),
        }
        Ok(engine)
    }

    /// Replace the configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach a store (builder pattern). Nothing is saved until the next mutation.
    #[must_use]
    pub fn with_store(mut self, store: Box<dyn SnapshotStore>) -> Self {
        self.store = Some(store);
        self
    }

    // === Database ===

    /// The item database.
    #[must_use]
    pub fn database(&self) -> &ItemDatabase {
        &self.database
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace all items. On error nothing changes.
    pub fn load(&mut self, items: Vec<Item>) -> Result<(), EngineError> {
        self.database.load(items)?;
        self.persist();
        Ok(())
    }

    /// Replace all items from a JSON snapshot. On error nothing changes.
    pub fn import_json(&mut self, text: &str) -> Result<(), EngineError> {
        self.database.import_json(text)?;
        self.persist();
        Ok(())
    }

    /// Current items as a JSON array.
    pub fn export_json(&self) -> Result<String, EngineError> {
        self.database.to_json()
    }

    /// Add an item with the named attributes set. Returns its index.
    pub fn add_item<I, K>(&mut self, title: &str, attrs: I) -> Result<usize, EngineError>
    where
        I: IntoIterator<Item = K>,
        K: Into<AttributeKey>,
    {
        let index = self.database.add(title, attrs)?;
        self.persist();
        Ok(index)
    }

    /// Delete the item at `index`. Returns `false` if out of bounds.
    pub fn delete_item(&mut self, index: usize) -> bool {
        let deleted = self.database.delete(index);
        if deleted {
            self.persist();
        }
        deleted
    }

    /// Restore the bundled starter films.
    pub fn reset_to_defaults(&mut self) {
        self.database = ItemDatabase::with_defaults();
        info!("Database reset to defaults");
        self.persist();
    }

    /// The attribute universe, sorted.
    #[must_use]
    pub fn attributes(&self) -> &[AttributeKey] {
        self.database.attributes()
    }

    /// Item and attribute counts.
    #[must_use]
    pub fn stats(&self) -> DatabaseStats {
        self.database.stats()
    }

    fn persist(&mut self) {
        if let Some(store) = self.store.as_mut() {
            if let Err(e) = store.save(self.database.items()) {
                warn!("Could not persist database snapshot: {}", e);
            }
        }
    }

    // === Session queries ===

    /// The current session.
    #[must_use]
    pub fn session(&self) -> &SessionState {
        self.round.session()
    }

    /// The current round.
    #[must_use]
    pub fn round(&self) -> &GameRound {
        &self.round
    }

    /// Next attribute to ask about.
    pub fn choose_best_question(&mut self) -> Option<AttributeKey> {
        choose_best_question(&self.database, self.round.session_mut(), &self.config)
    }

    /// Record an answer outside the round flow.
    pub fn record_answer(&mut self, attr: impl Into<AttributeKey>, value: AnswerValue) {
        self.round.session_mut().record_answer(attr, value);
    }

    /// All live items, best first.
    #[must_use]
    pub fn filter_items(&self) -> Vec<ScoredItem<'_>> {
        filter_items(&self.database, self.round.session(), &self.config)
    }

    /// The best `limit` candidates above the score floor.
    #[must_use]
    pub fn top_candidates(&self, limit: usize) -> Vec<ScoredItem<'_>> {
        top_candidates(&self.database, self.round.session(), &self.config, limit)
    }

    /// Should the engine stop asking and guess?
    #[must_use]
    pub fn should_make_guess(&self) -> bool {
        let candidates = self.filter_items();
        should_make_guess(&candidates, self.round.session(), &self.config.thresholds)
    }

    /// Exclude a title for the rest of the session.
    pub fn reject_item(&mut self, title: &str) {
        let session = self.round.session_mut();
        if session.reject(title) {
            debug!("Rejected {:?} ({} rejected so far)", title, session.rejected().len());
        }
    }

    /// Clear answers, asked questions, confirmations and rejections.
    pub fn reset_session(&mut self) {
        self.round.session_mut().reset();
    }

    // === Round flow ===

    /// Start a new game.
    pub fn start_game(&mut self) -> Turn {
        self.round.start(&self.database, &self.config)
    }

    /// Answer the pending question.
    pub fn answer(&mut self, value: AnswerValue) -> Result<Turn, EngineError> {
        self.round.answer(&self.database, &self.config, value)
    }

    /// Turn down a guess and keep asking.
    pub fn reject_guess(&mut self, title: &str) -> Turn {
        self.round.reject_guess(&self.database, &self.config, title)
    }

    /// Keep asking after a shortlist.
    pub fn continue_game(&mut self) -> Turn {
        self.round.continue_round(&self.database, &self.config)
    }

    /// Confirm the player's film.
    pub fn confirm(&mut self, title: impl Into<String>) -> Turn {
        self.round.confirm(title)
    }
}
