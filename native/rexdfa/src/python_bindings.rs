//! PyO3 bindings exposing the compiler as the `rexdfa` Python module.

use crate::alphabet::Alphabet;
use crate::automaton::{DFA, NFA, StateId, StateSet};
use crate::error::Error;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// An epsilon-NFA together with the alphabet of the expression it came from.
#[pyclass(name = "NFA", module = "rexdfa", frozen)]
pub struct PyNFA {
    nfa: NFA,
    alphabet: Alphabet,
}

#[pymethods]
impl PyNFA {
    #[getter]
    fn start_state(&self) -> StateId {
        self.nfa.start_state()
    }

    #[getter]
    fn accept_state(&self) -> StateId {
        self.nfa.accept_state()
    }

    #[getter]
    fn num_states(&self) -> StateId {
        self.nfa.num_states()
    }

    /// The literal symbols, in ascending order.
    #[getter]
    fn alphabet(&self) -> Vec<char> {
        self.alphabet.iter().collect()
    }

    fn epsilon_closure(&self, states: Vec<StateId>) -> Vec<StateId> {
        let states: StateSet = states.into_iter().collect();
        self.nfa.epsilon_closure(&states).to_vec()
    }

    fn move_on_symbol(&self, states: Vec<StateId>, symbol: char) -> Vec<StateId> {
        let states: StateSet = states.into_iter().collect();
        self.nfa.move_on_symbol(&states, symbol).to_vec()
    }

    fn accepts(&self, input: &str) -> bool {
        self.nfa.accepts(input)
    }

    /// Determinize via subset construction.
    fn to_dfa(&self) -> PyDFA {
        PyDFA {
            dfa: crate::to_dfa(&self.nfa, &self.alphabet),
        }
    }

    fn __str__(&self) -> String {
        self.nfa.to_string()
    }
}

/// A Deterministic Finite Automaton.
#[pyclass(name = "DFA", module = "rexdfa", frozen)]
pub struct PyDFA {
    dfa: DFA,
}

#[pymethods]
impl PyDFA {
    #[getter]
    fn start_state(&self) -> Option<StateId> {
        self.dfa.start_state()
    }

    #[getter]
    fn final_states(&self) -> Vec<StateId> {
        self.dfa.final_states().to_vec()
    }

    #[getter]
    fn num_states(&self) -> StateId {
        self.dfa.num_states()
    }

    fn transition(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.dfa.transition(state, symbol)
    }

    fn transitions(&self) -> Vec<(StateId, char, StateId)> {
        self.dfa.transitions().collect()
    }

    fn nfa_states(&self, state: StateId) -> Option<Vec<StateId>> {
        self.dfa.nfa_states(state).map(StateSet::to_vec)
    }

    fn accepts(&self, input: &str) -> bool {
        self.dfa.accepts(input)
    }

    fn is_empty(&self) -> bool {
        self.dfa.is_empty()
    }

    fn __str__(&self) -> String {
        self.dfa.to_string()
    }
}

#[pyfunction]
#[pyo3(name = "compile")]
fn py_compile(regex: &str) -> PyResult<PyNFA> {
    let (nfa, alphabet) = crate::compile(regex)?;
    Ok(PyNFA { nfa, alphabet })
}

#[pyfunction]
#[pyo3(name = "postfix_of")]
fn py_postfix_of(regex: &str) -> PyResult<String> {
    Ok(crate::postfix_of(regex)?)
}

#[pymodule]
fn rexdfa(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_compile, m)?)?;
    m.add_function(wrap_pyfunction!(py_postfix_of, m)?)?;
    m.add_class::<PyNFA>()?;
    m.add_class::<PyDFA>()?;
    Ok(())
}
