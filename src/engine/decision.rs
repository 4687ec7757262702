//! Guess-readiness.

use log::debug;

use super::scoring::ScoredItem;
use crate::core::{GuessThresholds, SessionState};

/// Decide whether to stop asking and guess, given scored candidates
/// (best first, as returned by `filter_items`).
///
/// Never guesses with no candidates or before `min_answers` meaningful
/// answers.
#[must_use]
pub fn should_make_guess(
    candidates: &[ScoredItem<'_>],
    session: &SessionState,
    thresholds: &GuessThresholds,
) -> bool {
    let Some(best) = candidates.first() else {
        return false;
    };
    let meaningful = session.meaningful_answers();

    debug!(
        "Guess check: {} meaningful answers, best {:?} at {:.2}, {} candidates, {} rejected",
        meaningful,
        best.title(),
        best.score,
        candidates.len(),
        session.rejected().len()
    );

    if meaningful < thresholds.min_answers {
        return false;
    }
    if best.score > thresholds.confident_score {
        return true;
    }
    if meaningful >= thresholds.max_answers {
        return true;
    }
    candidates.len() <= thresholds.few_candidates
        && meaningful >= thresholds.few_candidates_min_answers
}
