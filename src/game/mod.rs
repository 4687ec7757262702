//! Game flow over the engine.
//!
//! A `GameRound` turns the engine's queries into the loop a host drives:
//! ask a question, take an answer, then either ask again, propose a guess,
//! or offer a shortlist. A rejected guess is excluded and questioning
//! continues; the answers given so far are kept.

mod round;

pub use round::{Candidate, GameRound, Turn};
