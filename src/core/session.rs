//! Per-game session state.
//!
//! A `SessionState` holds everything one play-through has learned:
//! - Answers given, in question order
//! - Questions already asked (prevents re-asking)
//! - Attributes confirmed with a positive answer (biases later questions)
//! - Titles the player rejected as guesses (excluded for the rest of the game)
//!
//! Sessions are independent of the item database and of each other.
//! The algorithms in `crate::engine` take a session by reference, so any
//! number of sessions can run against the same database.
//!
//! Uses `im` persistent collections, so cloning a session to explore a
//! hypothetical answer is O(1).

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::answer::AnswerValue;
use crate::items::AttributeKey;

/// Mutable state of one game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Answers in the order the questions were asked.
    answers: Vector<(AttributeKey, AnswerValue)>,

    /// Attributes asked this session.
    asked: OrdSet<AttributeKey>,

    /// Attributes the player answered positively.
    positive: OrdSet<AttributeKey>,

    /// Titles rejected as guesses.
    rejected: OrdSet<String>,

    /// Attribute answered most recently.
    last: Option<AttributeKey>,
}

impl SessionState {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer for an attribute.
    ///
    /// Re-answering keeps the attribute's original position in the history.
    /// A positive answer marks the attribute as confirmed; a later
    /// non-positive answer does not withdraw the confirmation.
    pub fn record_answer(&mut self, attr: impl Into<AttributeKey>, value: AnswerValue) {
        let attr = attr.into();

        match self.answers.iter().position(|(key, _)| *key == attr) {
            Some(index) => {
                self.answers.set(index, (attr.clone(), value));
            }
            None => self.answers.push_back((attr.clone(), value)),
        }

        if value.is_positive() {
            self.positive.insert(attr.clone());
        }
        self.asked.insert(attr.clone());
        self.last = Some(attr);
    }

    /// The answer given for an attribute, if any.
    #[must_use]
    pub fn answer_for(&self, attr: &AttributeKey) -> Option<AnswerValue> {
        self.answers
            .iter()
            .find(|(key, _)| key == attr)
            .map(|(_, value)| *value)
    }

    /// Has this attribute been answered?
    #[must_use]
    pub fn is_answered(&self, attr: &AttributeKey) -> bool {
        self.answers.iter().any(|(key, _)| key == attr)
    }

    /// Has this attribute been asked since the last anti-starvation reset?
    #[must_use]
    pub fn was_asked(&self, attr: &AttributeKey) -> bool {
        self.asked.contains(attr)
    }

    /// Iterate over answers in question order.
    pub fn answers(&self) -> impl Iterator<Item = (&AttributeKey, AnswerValue)> {
        self.answers.iter().map(|(key, value)| (key, *value))
    }

    /// Number of answered attributes, including `Unknown`.
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of answers that carry information.
    #[must_use]
    pub fn meaningful_answers(&self) -> usize {
        self.answers
            .iter()
            .filter(|(_, value)| value.is_meaningful())
            .count()
    }

    /// The most recently answered attribute.
    ///
    /// Unlike the answer history, this follows re-answers.
    #[must_use]
    pub fn last_answered(&self) -> Option<&AttributeKey> {
        self.last.as_ref()
    }

    /// Attributes asked this session.
    #[must_use]
    pub fn asked(&self) -> &OrdSet<AttributeKey> {
        &self.asked
    }

    /// Attributes confirmed positively.
    #[must_use]
    pub fn positive(&self) -> &OrdSet<AttributeKey> {
        &self.positive
    }

    /// Rejected titles.
    #[must_use]
    pub fn rejected(&self) -> &OrdSet<String> {
        &self.rejected
    }

    /// Reject a guessed title for the rest of the session.
    ///
    /// Returns `true` if the title was not already rejected.
    pub fn reject(&mut self, title: impl Into<String>) -> bool {
        self.rejected.insert(title.into()).is_none()
    }

    /// Was this title rejected?
    #[must_use]
    pub fn is_rejected(&self, title: &str) -> bool {
        self.rejected.contains(title)
    }

    /// Forget which questions were asked, keeping the answers.
    pub fn clear_asked(&mut self) {
        self.asked.clear();
    }

    /// Clear everything for a fresh game.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
