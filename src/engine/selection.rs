//! Question selection.
//!
//! The next question is the attribute with the highest entropy among those
//! not yet asked. Once the player has confirmed some attributes, each
//! candidate also gets a bonus for co-occurring with them on live items,
//! which steers questioning toward the region of the database the player
//! is describing.
//!
//! When every attribute has been asked, the asked-set is cleared so answered
//! attributes can be revisited one cycle at a time. A revisit never
//! repeats the attribute answered last, unless it is the only one.

use log::debug;

use super::gain::{information_gain, live_items};
use crate::core::{EngineConfig, SessionState};
use crate::items::{AttributeKey, ItemDatabase};

/// Score marking "nothing chosen yet"; every real score is above it.
const NO_SCORE: f64 = -1.0;

/// Co-occurrence of `attr` with each confirmed attribute.
///
/// Sums, over every positively answered attribute `p`, the number of live
/// items where both `p` and `attr` are set. An item matching several
/// confirmed attributes is counted once per attribute.
#[must_use]
pub fn correlation_score(db: &ItemDatabase, session: &SessionState, attr: &AttributeKey) -> usize {
    session
        .positive()
        .iter()
        .map(|positive| {
            live_items(db, session)
                .filter(|item| item.is_set(positive.as_str()) && item.is_set(attr.as_str()))
                .count()
        })
        .sum()
}

/// Choose the attribute to ask about next.
///
/// Returns `None` if the database is empty or has no attributes.
/// May clear the session's asked-set (see module docs).
pub fn choose_best_question(
    db: &ItemDatabase,
    session: &mut SessionState,
    config: &EngineConfig,
) -> Option<AttributeKey> {
    if db.is_empty() {
        debug!("Item database is empty, no question to ask");
        return None;
    }

    // Fresh attributes first
    if let Some(choice) = pick(db, session, config, |s, a| !s.is_answered(a) && !s.was_asked(a)) {
        return Some(choice);
    }

    if session.asked().is_empty() {
        return None;
    }

    // Continue a revisit cycle already in progress
    if let Some(choice) = pick(db, session, config, |s, a| !s.was_asked(a)) {
        return Some(choice);
    }

    debug!("All {} attributes asked, starting a revisit cycle", db.attributes().len());
    session.clear_asked();

    let last = session.last_answered().cloned();
    let only_one = db.attributes().len() == 1;
    pick(db, session, config, |_, a| only_one || last.as_ref() != Some(a))
}

/// Best eligible attribute by combined score.
///
/// Ties go to the first attribute in name order.
fn pick<F>(
    db: &ItemDatabase,
    session: &SessionState,
    config: &EngineConfig,
    eligible: F,
) -> Option<AttributeKey>
where
    F: Fn(&SessionState, &AttributeKey) -> bool,
{
    let candidates: Vec<&AttributeKey> = db
        .attributes()
        .iter()
        .filter(|attr| eligible(session, attr))
        .collect();

    let mut best: Option<&AttributeKey> = None;
    let mut best_score = NO_SCORE;

    if !session.positive().is_empty() {
        for &attr in &candidates {
            let correlation = correlation_score(db, session, attr) as f64;
            let score = information_gain(db, session, attr.as_str())
                + config.correlation_weight * correlation;
            if score > best_score {
                best_score = score;
                best = Some(attr);
            }
        }
    }

    if best.is_none() {
        for &attr in &candidates {
            let gain = information_gain(db, session, attr.as_str());
            if gain > best_score {
                best_score = gain;
                best = Some(attr);
            }
        }
    }

    if let Some(attr) = best {
        debug!("Selected question {} (score {:.3})", attr, best_score);
    }
    best.cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnswerValue;
    use crate::items::Item;

    fn db(items: Vec<Item>) -> ItemDatabase {
        ItemDatabase::from_items(items).unwrap()
    }

    fn key(s: &str) -> AttributeKey {
        AttributeKey::new(s)
    }

    #[test]
    fn test_empty_database_returns_none() {
        let mut session = SessionState::new();
        let config = EngineConfig::default();
        assert!(choose_best_question(&ItemDatabase::new(), &mut session, &config).is_none());
    }

    #[test]
    fn test_attributeless_database_returns_none() {
        let db = db(vec![Item::new("A"), Item::new("B")]);
        let mut session = SessionState::new();
        assert!(choose_best_question(&db, &mut session, &EngineConfig::default()).is_none());
    }

    #[test]
    fn test_picks_highest_entropy() {
        // "split" divides 2/2, "rare" divides 1/3, "common" is on everything
        let db = db(vec![
            Item::with_attributes("A", ["common", "split", "rare"]),
            Item::with_attributes("B", ["common", "split"]),
            Item::with_attributes("C", ["common"]),
            Item::with_attributes("D", ["common"]),
        ]);
        let mut session = SessionState::new();
        let choice = choose_best_question(&db, &mut session, &EngineConfig::default());
        assert_eq!(choice, Some(key("split")));
    }

    #[test]
    fn test_ties_break_by_name() {
        let db = db(vec![
            Item::with_attributes("A", ["b_attr"]),
            Item::with_attributes("B", ["a_attr"]),
        ]);
        let mut session = SessionState::new();
        let choice = choose_best_question(&db, &mut session, &EngineConfig::default());
        assert_eq!(choice, Some(key("a_attr")));
    }

    #[test]
    fn test_correlation_score_counts_per_positive() {
        let db = db(vec![
            Item::with_attributes("A", ["p1", "p2", "x"]),
            Item::with_attributes("B", ["p1", "x"]),
            Item::with_attributes("C", ["x"]),
        ]);
        let mut session = SessionState::new();
        session.record_answer("p1", AnswerValue::Yes);
        session.record_answer("p2", AnswerValue::MostlyYes);

        // p1: A, B; p2: A
        assert_eq!(correlation_score(&db, &session, &key("x")), 3);

        session.reject("A");
        assert_eq!(correlation_score(&db, &session, &key("x")), 1);
    }

    #[test]
    fn test_correlation_steers_selection() {
        // Without correlation "b" wins the name tie-break; confirming "p"
        // favours "c", which co-occurs with it.
        let db = db(vec![
            Item::with_attributes("A", ["p", "c"]),
            Item::with_attributes("B", ["b"]),
            Item::with_attributes("C", ["p", "b"]),
            Item::with_attributes("D", ["c"]),
            Item::with_attributes("E", ["p", "c"]),
            Item::with_attributes("F", ["b"]),
        ]);
        let config = EngineConfig::default();

        let mut fresh = SessionState::new();
        fresh.record_answer("p", AnswerValue::Unknown);
        assert_eq!(choose_best_question(&db, &mut fresh, &config), Some(key("b")));

        let mut confirmed = SessionState::new();
        confirmed.record_answer("p", AnswerValue::Yes);
        assert_eq!(choose_best_question(&db, &mut confirmed, &config), Some(key("c")));
    }

    #[test]
    fn test_never_reasks_answered() {
        let db = db(vec![
            Item::with_attributes("A", ["x", "y"]),
            Item::with_attributes("B", ["y", "z"]),
            Item::with_attributes("C", ["z"]),
        ]);
        let config = EngineConfig::default();
        let mut session = SessionState::new();

        let mut seen = Vec::new();
        for _ in 0..3 {
            let q = choose_best_question(&db, &mut session, &config).unwrap();
            assert!(!seen.contains(&q), "re-asked {}", q);
            session.record_answer(q.clone(), AnswerValue::No);
            seen.push(q);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_exhaustion_triggers_revisit() {
        let db = db(vec![
            Item::with_attributes("A", ["x"]),
            Item::with_attributes("B", ["y"]),
        ]);
        let config = EngineConfig::default();
        let mut session = SessionState::new();
        session.record_answer("x", AnswerValue::No);
        session.record_answer("y", AnswerValue::No);

        let q = choose_best_question(&db, &mut session, &config);
        // The last-answered attribute is not repeated
        assert_eq!(q, Some(key("x")));
        assert!(session.asked().is_empty());
    }

    #[test]
    fn test_revisit_cycles_through_attributes() {
        let db = db(vec![
            Item::with_attributes("A", ["x"]),
            Item::with_attributes("B", ["y"]),
            Item::with_attributes("C", ["z"]),
        ]);
        let config = EngineConfig::default();
        let mut session = SessionState::new();
        for attr in ["x", "y", "z"] {
            session.record_answer(attr, AnswerValue::No);
        }

        let mut revisited = Vec::new();
        for _ in 0..3 {
            let q = choose_best_question(&db, &mut session, &config).unwrap();
            session.record_answer(q.clone(), AnswerValue::No);
            revisited.push(q);
        }
        revisited.sort();
        assert_eq!(revisited, vec![key("x"), key("y"), key("z")]);
    }

    #[test]
    fn test_single_attribute_can_be_reasked() {
        let db = db(vec![Item::with_attributes("A", ["x"]), Item::new("B")]);
        let config = EngineConfig::default();
        let mut session = SessionState::new();
        session.record_answer("x", AnswerValue::Yes);

        assert_eq!(choose_best_question(&db, &mut session, &config), Some(key("x")));
    }
}
