//! Thompson's construction: evaluates a postfix expression over a stack of
//! NFA fragments.

use crate::automaton::nfa::NFA;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::Symbol;
use crate::error::{Error, Malformed, Result};
use crate::regex::{Spanned, Token};
use std::collections::BTreeMap;

/// Owns the state counter and the transition table for one compilation.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    next_state: StateId,
    transitions: BTreeMap<(StateId, Symbol), StateSet>,
}

/// A partially built sub-automaton. The states it names live in the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fragment {
    start: StateId,
    accept: StateId,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh state.
    pub fn new_state(&mut self) -> StateId {
        let id = self.next_state;
        self.next_state += 1;
        id
    }

    pub fn add_transition(&mut self, source: StateId, symbol: char, destination: StateId) {
        self.add(source, Symbol::Literal(symbol), destination);
    }

    pub fn add_epsilon_transition(&mut self, source: StateId, destination: StateId) {
        self.add(source, Symbol::Epsilon, destination);
    }

    fn add(&mut self, source: StateId, symbol: Symbol, destination: StateId) {
        self.transitions
            .entry((source, symbol))
            .or_default()
            .insert(destination);
    }

    /// Freeze the table into an NFA with the given start and accept states.
    pub fn finish(self, start: StateId, accept: StateId) -> NFA {
        NFA::new(self.next_state, start, accept, self.transitions)
    }

    fn literal(&mut self, c: char) -> Fragment {
        let start = self.new_state();
        let accept = self.new_state();
        self.add_transition(start, c, accept);
        Fragment { start, accept }
    }

    fn concat(&mut self, first: Fragment, second: Fragment) -> Fragment {
        self.add_epsilon_transition(first.accept, second.start);
        Fragment {
            start: first.start,
            accept: second.accept,
        }
    }

    fn alternation(&mut self, left: Fragment, right: Fragment) -> Fragment {
        let branch = self.new_state();
        let join = self.new_state();
        self.add_epsilon_transition(branch, left.start);
        self.add_epsilon_transition(branch, right.start);
        self.add_epsilon_transition(left.accept, join);
        self.add_epsilon_transition(right.accept, join);
        Fragment {
            start: branch,
            accept: join,
        }
    }

    fn star(&mut self, inner: Fragment) -> Fragment {
        let start = self.new_state();
        let accept = self.new_state();
        self.add_epsilon_transition(start, inner.start);
        self.add_epsilon_transition(start, accept);
        self.add_epsilon_transition(inner.accept, inner.start);
        self.add_epsilon_transition(inner.accept, accept);
        Fragment { start, accept }
    }
}

fn pop_operand(stack: &mut Vec<Fragment>, op: Spanned) -> Result<Fragment> {
    stack
        .pop()
        .ok_or_else(|| Error::malformed(op.position, Malformed::MissingOperand(op.token)))
}

/// Build an NFA from a postfix token sequence (see
/// [`to_postfix`](crate::regex::to_postfix)).
pub fn build_nfa(postfix: &[Spanned]) -> Result<NFA> {
    let mut builder = NfaBuilder::new();
    let mut stack: Vec<Fragment> = Vec::new();

    for &item in postfix {
        let fragment = match item.token {
            Token::Literal(c) => builder.literal(c),
            Token::Concat => {
                let second = pop_operand(&mut stack, item)?;
                let first = pop_operand(&mut stack, item)?;
                builder.concat(first, second)
            }
            Token::Alternation => {
                let right = pop_operand(&mut stack, item)?;
                let left = pop_operand(&mut stack, item)?;
                builder.alternation(left, right)
            }
            Token::Star => {
                let inner = pop_operand(&mut stack, item)?;
                builder.star(inner)
            }
            Token::LeftParen => {
                return Err(Error::malformed(item.position, Malformed::UnmatchedLeftParen));
            }
            Token::RightParen => {
                return Err(Error::malformed(item.position, Malformed::UnmatchedRightParen));
            }
        };
        stack.push(fragment);
    }

    match stack.as_slice() {
        [] => Err(Error::EmptyExpression),
        [nfa] => Ok(builder.finish(nfa.start, nfa.accept)),
        [..] => {
            let position = postfix.last().map_or(0, |item| item.position);
            Err(Error::malformed(position, Malformed::MissingOperator))
        }
    }
}
