//! Symbol types for automata transitions.

use std::fmt;

/// Glyph used when an epsilon transition is rendered.
pub const EPSILON_GLYPH: char = 'ε';

/// The label of an NFA transition.
///
/// Literals order before epsilon, so sorted transition listings show the
/// epsilon moves of a state last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Literal(char),
    Epsilon,
}

impl Symbol {
    #[inline]
    pub fn is_epsilon(self) -> bool {
        self == Symbol::Epsilon
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Literal(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Literal(c) => write!(f, "{c}"),
            Symbol::Epsilon => write!(f, "{EPSILON_GLYPH}"),
        }
    }
}
