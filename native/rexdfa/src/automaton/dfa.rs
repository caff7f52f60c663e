//! Deterministic Finite Automaton (DFA) produced by subset construction.

use crate::alphabet::Alphabet;
use crate::automaton::state::{StateId, StateSet};
use std::collections::{BTreeMap, VecDeque};

/// A Deterministic Finite Automaton whose states stand for sets of NFA states.
#[derive(Debug, Clone)]
pub struct DFA {
    /// Number of states
    num_states: StateId,
    /// Start state (None until one is set)
    start_state: Option<StateId>,
    /// Final (accepting) states
    final_states: StateSet,
    /// Transitions: (source, symbol) -> destination
    transitions: BTreeMap<(StateId, char), StateId>,
    /// Symbols transitions may be labelled with
    alphabet: Alphabet,
    /// The NFA states each DFA state stands for, indexed by DFA state
    state_mapping: Vec<StateSet>,
}

impl DFA {
    /// Create a new DFA without states over `alphabet`.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            num_states: 0,
            start_state: None,
            final_states: StateSet::with_capacity(16),
            transitions: BTreeMap::new(),
            alphabet,
            state_mapping: Vec::new(),
        }
    }

    /// Add a new state standing for `nfa_states` and return its ID.
    pub fn add_state(&mut self, nfa_states: StateSet) -> StateId {
        let id = self.num_states;
        self.num_states += 1;
        self.state_mapping.push(nfa_states);
        id
    }

    pub fn set_start_state(&mut self, state: StateId) {
        self.start_state = Some(state);
    }

    pub fn add_final_state(&mut self, state: StateId) {
        self.final_states.insert(state);
    }

    /// Add a transition, replacing any previous one for `(source, symbol)`.
    pub fn add_transition(&mut self, source: StateId, symbol: char, destination: StateId) {
        self.transitions.insert((source, symbol), destination);
    }

    /// Get the transition from a state on a symbol. Symbols outside the
    /// alphabet have no transition.
    pub fn transition(&self, source: StateId, symbol: char) -> Option<StateId> {
        self.transitions.get(&(source, symbol)).copied()
    }

    pub fn num_states(&self) -> StateId {
        self.num_states
    }

    pub fn start_state(&self) -> Option<StateId> {
        self.start_state
    }

    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(state)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The NFA states a DFA state was built from.
    pub fn nfa_states(&self, state: StateId) -> Option<&StateSet> {
        self.state_mapping.get(state as usize)
    }

    /// All transitions, ordered by source state and then by symbol.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, char, StateId)> + '_ {
        self.transitions
            .iter()
            .map(|(&(src, sym), &dst)| (src, sym, dst))
    }

    /// Run the DFA over `input`.
    pub fn accepts(&self, input: &str) -> bool {
        let Some(mut state) = self.start_state else {
            return false;
        };

        for c in input.chars() {
            match self.transition(state, c) {
                Some(next) => state = next,
                None => return false,
            }
        }

        self.is_final(state)
    }

    /// Check if the DFA is empty (accepts no strings).
    pub fn is_empty(&self) -> bool {
        let Some(start) = self.start_state else {
            return true;
        };

        if self.final_states.is_empty() {
            return true;
        }

        // BFS to find if any final state is reachable
        let mut visited = StateSet::with_capacity(self.num_states as usize);
        let mut queue = VecDeque::new();
        queue.push_back(start);

        while let Some(state) = queue.pop_front() {
            if !visited.insert(state) {
                continue;
            }

            if self.final_states.contains(state) {
                return false;
            }

            for symbol in self.alphabet.iter() {
                if let Some(next) = self.transition(state, symbol) {
                    if !visited.contains(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        true
    }
}
