//! Finite automata built from regular expressions.
//!
//! This module provides:
//! - Thompson's construction of an epsilon-NFA from postfix tokens
//! - Epsilon closure and symbol move computation
//! - Subset construction (NFA to DFA conversion)

mod dfa;
mod nfa;
mod state;
mod subset_construction;
mod symbol;
mod thompson;

pub use dfa::DFA;
pub use nfa::NFA;
pub use state::{StateId, StateSet};
pub use subset_construction::subset_construction;
pub use symbol::{EPSILON_GLYPH, Symbol};
pub use thompson::{NfaBuilder, build_nfa};
