//! Subset construction algorithm for converting ε-NFA to DFA.

use crate::alphabet::Alphabet;
use crate::automaton::dfa::DFA;
use crate::automaton::nfa::NFA;
use crate::automaton::state::{StateId, StateSet};
use indexmap::IndexMap;
use std::collections::VecDeque;

/// Convert an epsilon-NFA to a DFA using the powerset construction algorithm.
///
/// DFA states are discovered breadth-first, trying symbols in ascending order,
/// so ids are reproducible for a given NFA and alphabet. The start state is
/// always 0. Empty target sets get no transition.
pub fn subset_construction(nfa: &NFA, alphabet: &Alphabet) -> DFA {
    // Sets of NFA states already assigned a DFA state, keyed by contents
    let mut state_mapping: IndexMap<StateSet, StateId> = IndexMap::new();
    let mut dfa = DFA::new(alphabet.clone());
    let mut worklist: VecDeque<(StateSet, StateId)> = VecDeque::new();

    let start = StateSet::singleton(nfa.start_state(), nfa.num_states() as usize);
    let initial_set = nfa.epsilon_closure(&start);
    let initial_dfa_state = dfa.add_state(initial_set.clone());
    dfa.set_start_state(initial_dfa_state);
    state_mapping.insert(initial_set.clone(), initial_dfa_state);
    worklist.push_back((initial_set, initial_dfa_state));

    while let Some((current_nfa_set, current_dfa_state)) = worklist.pop_front() {
        for symbol in alphabet.iter() {
            let moved = nfa.move_on_symbol(&current_nfa_set, symbol);
            let next_nfa_set = nfa.epsilon_closure(&moved);

            if next_nfa_set.is_empty() {
                continue;
            }

            let next_dfa_state = match state_mapping.get(&next_nfa_set) {
                Some(&existing) => existing,
                None => {
                    let new_state = dfa.add_state(next_nfa_set.clone());
                    state_mapping.insert(next_nfa_set.clone(), new_state);
                    worklist.push_back((next_nfa_set, new_state));
                    new_state
                }
            };

            dfa.add_transition(current_dfa_state, symbol, next_dfa_state);
        }
    }

    for (nfa_states, &dfa_state) in &state_mapping {
        if nfa_states.contains(nfa.accept_state()) {
            dfa.add_final_state(dfa_state);
        }
    }

    dfa
}
