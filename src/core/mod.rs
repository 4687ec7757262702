//! Core engine types: answers, sessions, configuration, errors.
//!
//! These are independent of any particular item database. Hosts tune the
//! engine via `EngineConfig` rather than modifying the algorithms.

pub mod answer;
pub mod config;
pub mod error;
pub mod session;

pub use answer::{AnswerValue, UnknownAnswerLabel};
pub use config::{EngineConfig, GuessThresholds};
pub use error::EngineError;
pub use session::SessionState;
