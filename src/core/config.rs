//! Engine configuration.
//!
//! Hosts configure the engine at startup by providing:
//! - `GuessThresholds`: When to stop asking and commit to a guess
//! - `EngineConfig`: Scoring weights, candidate limits, and round limits
//!
//! `Default` gives the reference tuning. `lenient()` gives the looser
//! tuning of the earlier game variant, which guesses sooner.

use serde::{Deserialize, Serialize};

/// Thresholds for deciding that enough has been learned to guess.
///
/// Rules are checked in order and the first match wins:
/// 1. fewer than `min_answers` meaningful answers: keep asking
/// 2. leader scores above `confident_score`: guess
/// 3. at least `max_answers` meaningful answers: guess
/// 4. at most `few_candidates` remain and at least
///    `few_candidates_min_answers` meaningful answers: guess
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessThresholds {
    /// Meaningful answers required before any guess.
    pub min_answers: usize,

    /// Leader score above which a single guess is confident.
    pub confident_score: f64,

    /// Hard ceiling on meaningful answers.
    pub max_answers: usize,

    /// Candidate count considered "few".
    pub few_candidates: usize,

    /// Meaningful answers required for the few-candidates rule.
    pub few_candidates_min_answers: usize,
}

impl Default for GuessThresholds {
    fn default() -> Self {
        Self {
            min_answers: 8,
            confident_score: 0.7,
            max_answers: 20,
            few_candidates: 2,
            few_candidates_min_answers: 10,
        }
    }
}

impl GuessThresholds {
    /// Earlier, looser tuning (5 / 15 / 3-with-8).
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            min_answers: 5,
            confident_score: 0.7,
            max_answers: 15,
            few_candidates: 3,
            few_candidates_min_answers: 8,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Guess-readiness rules.
    pub thresholds: GuessThresholds,

    /// Weight of the positive-answer correlation term in question selection.
    pub correlation_weight: f64,

    /// Score bonus per confirmed positive attribute an item has.
    pub positive_bonus: f64,

    /// Candidates scoring below this are hidden from the top-candidates view.
    pub score_floor: f64,

    /// Default size of the top-candidates view.
    pub top_candidates: usize,

    /// Questions per round before falling back to a shortlist.
    pub question_limit: u32,

    /// Leader score above which a round proposes a single guess
    /// instead of a shortlist.
    pub guess_confidence: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thresholds: GuessThresholds::default(),
            correlation_weight: 0.1,
            positive_bonus: 0.1,
            score_floor: 0.01,
            top_candidates: 10,
            question_limit: 30,
            guess_confidence: 0.5,
        }
    }
}

impl EngineConfig {
    /// Tuning of the earlier game variant.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            thresholds: GuessThresholds::lenient(),
            question_limit: 20,
            guess_confidence: 0.6,
            ..Self::default()
        }
    }

    /// Set guess-readiness thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: GuessThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the per-round question limit.
    #[must_use]
    pub fn with_question_limit(mut self, limit: u32) -> Self {
        self.question_limit = limit;
        self
    }

    /// Set the default top-candidates view size.
    #[must_use]
    pub fn with_top_candidates(mut self, limit: usize) -> Self {
        self.top_candidates = limit;
        self
    }

    /// Set the single-guess confidence.
    #[must_use]
    pub fn with_guess_confidence(mut self, confidence: f64) -> Self {
        self.guess_confidence = confidence;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = GuessThresholds::default();
        assert_eq!(t.min_answers, 8);
        assert_eq!(t.max_answers, 20);
        assert_eq!(t.few_candidates, 2);
        assert_eq!(t.few_candidates_min_answers, 10);
    }

    #[test]
    fn test_lenient_config() {
        let config = EngineConfig::lenient();
        assert_eq!(config.thresholds.min_answers, 5);
        assert_eq!(config.thresholds.few_candidates, 3);
        assert_eq!(config.question_limit, 20);
        assert_eq!(config.correlation_weight, 0.1);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_question_limit(12)
            .with_top_candidates(5)
            .with_guess_confidence(0.8);

        assert_eq!(config.question_limit, 12);
        assert_eq!(config.top_candidates, 5);
        assert_eq!(config.guess_confidence, 0.8);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::lenient();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
