//! Epsilon Non-deterministic Finite Automaton (ε-NFA) with a single start and
//! a single accept state.

use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::Symbol;
use std::collections::{BTreeMap, VecDeque};

/// An epsilon-NFA as produced by Thompson's construction.
#[derive(Debug, Clone)]
pub struct NFA {
    /// Number of states (states are numbered 0..num_states)
    num_states: StateId,
    start_state: StateId,
    accept_state: StateId,
    /// Transitions: (source, symbol) -> set of destination states
    transitions: BTreeMap<(StateId, Symbol), StateSet>,
}

impl NFA {
    pub(crate) fn new(
        num_states: StateId,
        start_state: StateId,
        accept_state: StateId,
        transitions: BTreeMap<(StateId, Symbol), StateSet>,
    ) -> Self {
        Self {
            num_states,
            start_state,
            accept_state,
            transitions,
        }
    }

    pub fn num_states(&self) -> StateId {
        self.num_states
    }

    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    pub fn accept_state(&self) -> StateId {
        self.accept_state
    }

    /// Destinations of `state` on `symbol`, if any.
    pub fn targets(&self, state: StateId, symbol: Symbol) -> Option<&StateSet> {
        self.transitions.get(&(state, symbol))
    }

    /// All transitions, ordered by source state and then by symbol.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Symbol, &StateSet)> + '_ {
        self.transitions
            .iter()
            .map(|(&(src, sym), dests)| (src, sym, dests))
    }

    /// All states reachable from `states` through epsilon transitions only,
    /// including `states` themselves.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::with_capacity(self.num_states as usize);
        closure.union_with(states);
        let mut queue: VecDeque<StateId> = states.iter().collect();

        while let Some(s) = queue.pop_front() {
            if let Some(destinations) = self.transitions.get(&(s, Symbol::Epsilon)) {
                for dest in destinations.iter() {
                    if closure.insert(dest) {
                        queue.push_back(dest);
                    }
                }
            }
        }

        closure
    }

    /// The states reached from `states` by consuming `symbol`. Epsilon
    /// transitions are not followed; a symbol with no transitions yields the
    /// empty set.
    pub fn move_on_symbol(&self, states: &StateSet, symbol: char) -> StateSet {
        let mut reached = StateSet::with_capacity(self.num_states as usize);

        for state in states.iter() {
            if let Some(destinations) = self.transitions.get(&(state, Symbol::Literal(symbol))) {
                reached.union_with(destinations);
            }
        }

        reached
    }

    /// Simulate the NFA on `input`, tracking the closure of active states.
    pub fn accepts(&self, input: &str) -> bool {
        let start = StateSet::singleton(self.start_state, self.num_states as usize);
        let mut current = self.epsilon_closure(&start);

        for c in input.chars() {
            current = self.epsilon_closure(&self.move_on_symbol(&current, c));
            if current.is_empty() {
                return false;
            }
        }

        current.contains(self.accept_state)
    }
}
