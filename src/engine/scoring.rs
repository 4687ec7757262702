//! Candidate scoring.
//!
//! Each live item gets a match score in `[0, 1]` comparing its attributes
//! with the player's answers:
//!
//! - item has the attribute, answer agrees in sign: `0.9 + 0.1 * |u|`
//! - item has the attribute, answer disagrees: `0.2 - |u - v| / 5`
//! - item lacks the attribute, answer positive: `-0.2` at weight `0.2`
//! - item lacks the attribute, answer negative: `0.2 * u` at weight `0.2`
//!
//! The weighted mean plus `positive_bonus` per confirmed attribute the item
//! has is clamped to `[0, 1]`. With no meaningful answers the base is 0.5.

use serde::Serialize;

use super::gain::{attribute_value, live_items};
use crate::core::{EngineConfig, SessionState};
use crate::items::{Item, ItemDatabase};

/// Base score when no answer has weight.
const NEUTRAL_SCORE: f64 = 0.5;

/// Weight of an answer about an attribute the item lacks.
const MISSING_WEIGHT: f64 = 0.2;

/// An item with its match score.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoredItem<'a> {
    /// Position in the database.
    pub index: usize,
    /// The item.
    pub item: &'a Item,
    /// Match score in `[0, 1]`.
    pub score: f64,
}

impl ScoredItem<'_> {
    /// The item's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.item.title
    }
}

/// Similarity between an answer `u` and an item value `v` (±1).
#[inline]
fn similarity(u: f64, v: f64) -> f64 {
    if (u > 0.0 && v > 0.0) || (u < 0.0 && v < 0.0) {
        0.9 + 0.1 * u.abs()
    } else {
        0.2 - (u - v).abs() / 5.0
    }
}

/// Match score of one item against the session's answers.
#[must_use]
pub fn score_item(item: &Item, session: &SessionState, config: &EngineConfig) -> f64 {
    let mut sum = 0.0;
    let mut weight = 0.0;

    for (attr, answer) in session.answers() {
        if !answer.is_meaningful() {
            continue;
        }
        let u = answer.value();

        if item.has(attr.as_str()) {
            let v = f64::from(attribute_value(item, attr.as_str()));
            sum += similarity(u, v);
            weight += 1.0;
        } else if u > 0.0 {
            sum -= MISSING_WEIGHT;
            weight += MISSING_WEIGHT;
        } else {
            sum += MISSING_WEIGHT * u;
            weight += MISSING_WEIGHT;
        }
    }

    let confirmed = session
        .positive()
        .iter()
        .filter(|attr| item.is_set(attr.as_str()))
        .count();
    let bonus = config.positive_bonus * confirmed as f64;

    let score = if weight > 0.0 {
        sum / weight + bonus
    } else {
        NEUTRAL_SCORE + bonus
    };
    score.clamp(0.0, 1.0)
}

/// Score every live item, best first.
///
/// Rejected items are left out entirely. Equal scores keep database order.
#[must_use]
pub fn filter_items<'a>(
    db: &'a ItemDatabase,
    session: &SessionState,
    config: &EngineConfig,
) -> Vec<ScoredItem<'a>> {
    let mut scored: Vec<ScoredItem<'a>> = db
        .iter()
        .enumerate()
        .filter(|(_, item)| !session.is_rejected(&item.title))
        .map(|(index, item)| ScoredItem {
            index,
            item,
            score: score_item(item, session, config),
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored
}

/// The best candidates scoring at least `config.score_floor`, at most `limit`.
#[must_use]
pub fn top_candidates<'a>(
    db: &'a ItemDatabase,
    session: &SessionState,
    config: &EngineConfig,
    limit: usize,
) -> Vec<ScoredItem<'a>> {
    filter_items(db, session, config)
        .into_iter()
        .filter(|c| c.score >= config.score_floor)
        .take(limit)
        .collect()
}

/// Number of live items.
#[must_use]
pub fn live_count(db: &ItemDatabase, session: &SessionState) -> usize {
    live_items(db, session).count()
}
