//! One round of the guessing game.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{AnswerValue, EngineConfig, EngineError, SessionState};
use crate::engine::{choose_best_question, filter_items, should_make_guess, top_candidates, ScoredItem};
use crate::items::{AttributeKey, ItemDatabase};

/// A candidate detached from the database borrow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Position in the database when scored.
    pub index: usize,
    /// Item title.
    pub title: String,
    /// Match score in `[0, 1]`.
    pub score: f64,
}

impl From<&ScoredItem<'_>> for Candidate {
    fn from(scored: &ScoredItem<'_>) -> Self {
        Self {
            index: scored.index,
            title: scored.item.title.clone(),
            score: scored.score,
        }
    }
}

/// What the host should show next.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Turn {
    /// Ask the player about this attribute.
    Ask(AttributeKey),
    /// Propose a single film.
    Guess(Candidate),
    /// Offer a list of likely films, best first.
    Shortlist(Vec<Candidate>),
    /// Nothing left to ask; the host may offer a restart.
    OutOfQuestions,
    /// The player confirmed this title.
    Solved(String),
}

/// Drives the ask → answer → guess loop over a session.
///
/// The round owns its session; the database and config are borrowed per
/// call, so many rounds can share one database.
#[derive(Clone, Debug, Default)]
pub struct GameRound {
    session: SessionState,
    pending: Option<AttributeKey>,
    questions: u32,
}

impl GameRound {
    /// Create an idle round. Call `start` to ask the first question.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The round's session state.
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Mutable access to the session state.
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    /// The question waiting for an answer.
    #[must_use]
    pub fn pending_question(&self) -> Option<&AttributeKey> {
        self.pending.as_ref()
    }

    /// Questions answered this round.
    #[must_use]
    pub fn questions_asked(&self) -> u32 {
        self.questions
    }

    /// Reset everything and ask the first question.
    pub fn start(&mut self, db: &ItemDatabase, config: &EngineConfig) -> Turn {
        self.session.reset();
        self.questions = 0;
        self.next_question(db, config)
    }

    /// Answer the pending question.
    pub fn answer(
        &mut self,
        db: &ItemDatabase,
        config: &EngineConfig,
        value: AnswerValue,
    ) -> Result<Turn, EngineError> {
        let attr = self.pending.take().ok_or(EngineError::NoPendingQuestion)?;
        debug!("Answer {} to {}", value, attr);

        self.questions += 1;
        self.session.record_answer(attr, value);

        let scored = filter_items(db, &self.session, config);
        if should_make_guess(&scored, &self.session, &config.thresholds) {
            if let Some(best) = scored.first().filter(|b| b.score > config.guess_confidence) {
                return Ok(Turn::Guess(Candidate::from(best)));
            }
            return Ok(self.shortlist_or_continue(db, config));
        }

        if self.questions >= config.question_limit {
            return Ok(self.shortlist_or_continue(db, config));
        }

        Ok(self.next_question(db, config))
    }

    /// The player said the guess was wrong: exclude it and keep asking.
    pub fn reject_guess(&mut self, db: &ItemDatabase, config: &EngineConfig, title: &str) -> Turn {
        if self.session.reject(title) {
            debug!(
                "Rejected {:?} ({} rejected so far)",
                title,
                self.session.rejected().len()
            );
        }
        self.next_question(db, config)
    }

    /// Keep asking after a shortlist the player did not pick from.
    pub fn continue_round(&mut self, db: &ItemDatabase, config: &EngineConfig) -> Turn {
        self.next_question(db, config)
    }

    /// The player confirmed a title; the round is over.
    pub fn confirm(&mut self, title: impl Into<String>) -> Turn {
        self.pending = None;
        Turn::Solved(title.into())
    }

    fn next_question(&mut self, db: &ItemDatabase, config: &EngineConfig) -> Turn {
        self.pending = choose_best_question(db, &mut self.session, config);
        match &self.pending {
            Some(attr) => Turn::Ask(attr.clone()),
            None => Turn::OutOfQuestions,
        }
    }

    fn shortlist_or_continue(&mut self, db: &ItemDatabase, config: &EngineConfig) -> Turn {
        let top: Vec<Candidate> = top_candidates(db, &self.session, config, config.top_candidates)
            .iter()
            .map(Candidate::from)
            .collect();

        if top.is_empty() {
            // Nothing plausible yet
            return self.next_question(db, config);
        }
        Turn::Shortlist(top)
    }
}
