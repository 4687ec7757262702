//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{AnswerValue, EngineConfig, EngineError};
use crate::engine::{GuessEngine, ScoredItem};
use crate::game::{Candidate, Turn};

fn to_py_err(e: EngineError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// An answer given either as a label ("mostly yes") or a scale value (0.7).
#[derive(FromPyObject)]
enum AnswerArg {
    Label(String),
    Value(f64),
}

impl AnswerArg {
    fn resolve(self) -> PyResult<AnswerValue> {
        match self {
            AnswerArg::Label(label) => label
                .parse()
                .map_err(|e| PyValueError::new_err(format!("{}", e))),
            AnswerArg::Value(v) => AnswerValue::from_value(v)
                .ok_or_else(|| PyValueError::new_err(format!("not an answer value: {}", v))),
        }
    }
}

/// Python wrapper for a scored candidate.
#[pyclass(name = "Candidate")]
#[derive(Clone, Debug)]
pub struct PyCandidate(pub Candidate);

#[pymethods]
impl PyCandidate {
    /// Item title.
    #[getter]
    fn title(&self) -> String {
        self.0.title.clone()
    }

    /// Match score in [0, 1].
    #[getter]
    fn score(&self) -> f64 {
        self.0.score
    }

    /// Position in the database.
    #[getter]
    fn index(&self) -> usize {
        self.0.index
    }

    fn __repr__(&self) -> String {
        format!("Candidate({:?}, score={:.2})", self.0.title, self.0.score)
    }
}

impl From<&ScoredItem<'_>> for PyCandidate {
    fn from(scored: &ScoredItem<'_>) -> Self {
        Self(Candidate::from(scored))
    }
}

/// Python wrapper for a round turn.
///
/// `kind` is one of "ask", "guess", "shortlist", "out_of_questions", "solved".
#[pyclass(name = "Turn")]
#[derive(Clone, Debug)]
pub struct PyTurn(pub Turn);

#[pymethods]
impl PyTurn {
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            Turn::Ask(_) => "ask",
            Turn::Guess(_) => "guess",
            Turn::Shortlist(_) => "shortlist",
            Turn::OutOfQuestions => "out_of_questions",
            Turn::Solved(_) => "solved",
        }
    }

    /// The attribute to ask about, for "ask" turns.
    #[getter]
    fn question(&self) -> Option<String> {
        match &self.0 {
            Turn::Ask(attr) => Some(attr.to_string()),
            _ => None,
        }
    }

    /// Proposed candidates, for "guess" and "shortlist" turns.
    #[getter]
    fn candidates(&self) -> Vec<PyCandidate> {
        match &self.0 {
            Turn::Guess(c) => vec![PyCandidate(c.clone())],
            Turn::Shortlist(list) => list.iter().cloned().map(PyCandidate).collect(),
            _ => Vec::new(),
        }
    }

    fn __repr__(&self) -> String {
        format!("Turn({:?})", self.0)
    }
}

/// Python wrapper for GuessEngine.
#[pyclass(name = "GuessEngine")]
pub struct PyGuessEngine(GuessEngine);

#[pymethods]
impl PyGuessEngine {
    /// Create an engine.
    ///
    /// # Arguments
    /// - defaults: start from the bundled starter films
    /// - lenient: use the earlier, quicker-to-guess tuning
    #[new]
    #[pyo3(signature = (defaults = true, lenient = false))]
    fn new(defaults: bool, lenient: bool) -> Self {
        let mut engine = GuessEngine::new();
        if defaults {
            engine.reset_to_defaults();
        }
        if lenient {
            engine = engine.with_config(EngineConfig::lenient());
        }
        Self(engine)
    }

    /// Replace the database from JSON text.
    fn load_json(&mut self, text: &str) -> PyResult<()> {
        self.0.import_json(text).map_err(to_py_err)
    }

    /// Current database as JSON text.
    fn export_json(&self) -> PyResult<String> {
        self.0.export_json().map_err(to_py_err)
    }

    /// Add a film; returns its index.
    fn add_item(&mut self, title: &str, attributes: Vec<String>) -> PyResult<usize> {
        self.0.add_item(title, attributes).map_err(to_py_err)
    }

    /// Delete a film by index; False if out of range.
    fn delete_item(&mut self, index: usize) -> bool {
        self.0.delete_item(index)
    }

    /// Sorted attribute names.
    fn attributes(&self) -> Vec<String> {
        self.0.attributes().iter().map(|a| a.to_string()).collect()
    }

    /// (items, attributes) counts.
    fn stats(&self) -> (usize, usize) {
        let stats = self.0.stats();
        (stats.items, stats.attributes)
    }

    fn choose_best_question(&mut self) -> Option<String> {
        self.0.choose_best_question().map(|a| a.to_string())
    }

    fn record_answer(&mut self, attribute: &str, answer: AnswerArg) -> PyResult<()> {
        let value = answer.resolve()?;
        self.0.record_answer(attribute, value);
        Ok(())
    }

    fn filter_items(&self) -> Vec<PyCandidate> {
        self.0.filter_items().iter().map(PyCandidate::from).collect()
    }

    #[pyo3(signature = (limit = 10))]
    fn top_candidates(&self, limit: usize) -> Vec<PyCandidate> {
        self.0.top_candidates(limit).iter().map(PyCandidate::from).collect()
    }

    fn should_make_guess(&self) -> bool {
        self.0.should_make_guess()
    }

    fn reject_item(&mut self, title: &str) {
        self.0.reject_item(title);
    }

    fn reset_session(&mut self) {
        self.0.reset_session();
    }

    /// Start a round and return the first turn.
    fn start_game(&mut self) -> PyTurn {
        PyTurn(self.0.start_game())
    }

    /// Answer the pending question.
    fn answer(&mut self, answer: AnswerArg) -> PyResult<PyTurn> {
        let value = answer.resolve()?;
        self.0.answer(value).map(PyTurn).map_err(to_py_err)
    }

    fn reject_guess(&mut self, title: &str) -> PyTurn {
        PyTurn(self.0.reject_guess(title))
    }

    fn continue_game(&mut self) -> PyTurn {
        PyTurn(self.0.continue_game())
    }

    fn __repr__(&self) -> String {
        let stats = self.0.stats();
        format!("GuessEngine(items={}, attributes={})", stats.items, stats.attributes)
    }
}
