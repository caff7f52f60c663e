//! Errors raised while compiling a regular expression.

use crate::regex::Token;
use std::fmt;

/// Why an expression is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// A `(` that is never closed.
    UnmatchedLeftParen,
    /// A `)` with no open group.
    UnmatchedRightParen,
    /// An operator that does not have enough operands on the fragment stack.
    MissingOperand(Token),
    /// Operands left over with no operator joining them.
    MissingOperator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression cannot be parsed or evaluated. `position` is the char
    /// index of the offending token in the input.
    MalformedExpression { position: usize, kind: Malformed },
    /// The expression contains no operands.
    EmptyExpression,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(position: usize, kind: Malformed) -> Self {
        Error::MalformedExpression { position, kind }
    }
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::UnmatchedLeftParen => write!(f, "unmatched '('"),
            Malformed::UnmatchedRightParen => write!(f, "unmatched ')'"),
            Malformed::MissingOperand(op) => write!(f, "operator '{op}' is missing an operand"),
            Malformed::MissingOperator => write!(f, "operands without an operator joining them"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedExpression { position, kind } => {
                write!(f, "malformed expression at position {position}: {kind}")
            }
            Error::EmptyExpression => write!(f, "empty expression"),
        }
    }
}

impl std::error::Error for Error {}
