//! Compiles regular expressions over single-character literals into finite
//! automata.
//!
//! Supported operators are concatenation (implicit, or written `·`),
//! alternation `|`, Kleene star `*` and grouping with parentheses. An
//! expression goes through these passes:
//!
//! 1. [`regex::expand_concatenation`] makes concatenation explicit.
//! 2. [`regex::to_postfix`] reorders tokens by precedence.
//! 3. [`automaton::build_nfa`] runs Thompson's construction.
//! 4. [`automaton::subset_construction`] determinizes the NFA.
//!
//! ```
//! let (nfa, alphabet) = rexdfa::compile("(a|b)*c").unwrap();
//! let dfa = rexdfa::to_dfa(&nfa, &alphabet);
//! assert!(dfa.accepts("abc"));
//! assert!(!dfa.accepts("ca"));
//! ```

pub mod alphabet;
pub mod automaton;
pub mod error;
pub mod regex;

mod report;

#[cfg(feature = "python")]
mod python_bindings;

pub use alphabet::Alphabet;
pub use automaton::{DFA, NFA, StateId, StateSet};
pub use error::{Error, Malformed, Result};
pub use regex::postfix_of;

/// Compile `regex` into an epsilon-NFA and collect its alphabet.
pub fn compile(regex: &str) -> Result<(NFA, Alphabet)> {
    if regex.is_empty() {
        return Err(Error::EmptyExpression);
    }

    let expanded = regex::expand_concatenation(regex);
    let postfix = regex::to_postfix(&expanded)?;
    let nfa = automaton::build_nfa(&postfix)?;
    Ok((nfa, Alphabet::from_regex(regex)))
}

/// Determinize `nfa` over `alphabet`.
pub fn to_dfa(nfa: &NFA, alphabet: &Alphabet) -> DFA {
    automaton::subset_construction(nfa, alphabet)
}
