//! Python bindings for the film-guess engine.
//!
//! # Quick Start
//!
//! ```python
//! import film_guess as fg
//!
//! engine = fg.GuessEngine()
//! turn = engine.start_game()
//! while turn.kind == "ask":
//!     print(turn.question)
//!     turn = engine.answer(input("> "))
//! print(turn.kind, turn.candidates)
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// film_guess: attribute-scoring film guessing engine.
#[pymodule]
fn film_guess(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGuessEngine>()?;
    m.add_class::<PyCandidate>()?;
    m.add_class::<PyTurn>()?;
    Ok(())
}
