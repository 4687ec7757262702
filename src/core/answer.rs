//! The five-point answer scale a player uses to respond to a question.
//!
//! Values are symmetric around zero. `Unknown` carries no information and is
//! skipped by scoring and by the "meaningful answer" count.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A player's answer to "does the film have attribute X?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerValue {
    Yes,
    MostlyYes,
    Unknown,
    MostlyNo,
    No,
}

impl AnswerValue {
    /// All answers, strongest "yes" first.
    pub const ALL: [AnswerValue; 5] = [
        AnswerValue::Yes,
        AnswerValue::MostlyYes,
        AnswerValue::Unknown,
        AnswerValue::MostlyNo,
        AnswerValue::No,
    ];

    /// Numeric weight on the `[-1, 1]` scale.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            AnswerValue::Yes => 1.0,
            AnswerValue::MostlyYes => 0.7,
            AnswerValue::Unknown => 0.0,
            AnswerValue::MostlyNo => -0.7,
            AnswerValue::No => -1.0,
        }
    }

    /// Map a numeric weight back onto the scale.
    ///
    /// Only the five exact scale points are accepted.
    #[must_use]
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| (a.value() - value).abs() < f64::EPSILON)
    }

    /// Anything but `Unknown`.
    #[must_use]
    pub const fn is_meaningful(self) -> bool {
        !matches!(self, AnswerValue::Unknown)
    }

    /// `Yes` or `MostlyYes`.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, AnswerValue::Yes | AnswerValue::MostlyYes)
    }

    /// Canonical host label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AnswerValue::Yes => "yes",
            AnswerValue::MostlyYes => "mostly yes",
            AnswerValue::Unknown => "unknown",
            AnswerValue::MostlyNo => "mostly no",
            AnswerValue::No => "no",
        }
    }
}

impl std::fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Label did not name any answer on the scale.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognised answer label: {0:?}")]
pub struct UnknownAnswerLabel(pub String);

impl FromStr for AnswerValue {
    type Err = UnknownAnswerLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect();

        match normalized.as_str() {
            "yes" | "y" => Ok(AnswerValue::Yes),
            "mostly yes" | "probably" | "probably yes" => Ok(AnswerValue::MostlyYes),
            "unknown" | "don't know" | "dont know" | "?" => Ok(AnswerValue::Unknown),
            "mostly no" | "probably not" | "probably no" => Ok(AnswerValue::MostlyNo),
            "no" | "n" => Ok(AnswerValue::No),
            _ => Err(UnknownAnswerLabel(s.to_string())),
        }
    }
}
