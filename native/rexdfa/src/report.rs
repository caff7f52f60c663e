//! Tabular rendering of automata.

use crate::automaton::{DFA, NFA, StateId};
use std::fmt;

/// Label of a DFA state in rendered tables.
fn label(state: StateId) -> String {
    format!("S{state}")
}

impl fmt::Display for NFA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NFA Transition Table:")?;
        writeln!(f, "Start State: {}", self.start_state())?;
        writeln!(f, "Accept State: {}", self.accept_state())?;
        writeln!(f, "State\tSymbol\tNext States")?;
        for (state, symbol, targets) in self.transitions() {
            writeln!(f, "{state}\t{symbol}\t{targets}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DFA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DFA Transition Table:")?;
        match self.start_state() {
            Some(start) => writeln!(f, "Start State: {}", label(start))?,
            None => writeln!(f, "Start State: none")?,
        }
        let accepting: Vec<String> = self.final_states().iter().map(label).collect();
        writeln!(f, "Accept States: [{}]", accepting.join(", "))?;
        writeln!(f, "State\tNFA States\tSymbol\tNext State")?;
        for (state, symbol, target) in self.transitions() {
            let nfa_states = self
                .nfa_states(state)
                .map(ToString::to_string)
                .unwrap_or_default();
            writeln!(f, "{}\t{nfa_states}\t{symbol}\t{}", label(state), label(target))?;
        }
        Ok(())
    }
}
