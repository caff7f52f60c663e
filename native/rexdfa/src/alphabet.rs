//! The set of literal symbols of an expression.

use crate::regex::Token;
use std::collections::BTreeSet;
use std::fmt;

/// Literal symbols appearing in a regular expression, iterated in ascending
/// code point order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: BTreeSet<char>,
}

impl Alphabet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every character of `regex` that is not an operator or a
    /// parenthesis.
    pub fn from_regex(regex: &str) -> Self {
        regex
            .chars()
            .filter(|&c| matches!(Token::from_char(c), Token::Literal(_)))
            .collect()
    }

    pub fn insert(&mut self, symbol: char) -> bool {
        self.symbols.insert(symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
