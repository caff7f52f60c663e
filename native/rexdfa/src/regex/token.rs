//! Tokens of the regular expression language and the concatenation expander.

use std::fmt;

/// The visible concatenation operator used in expanded and postfix forms.
pub const CONCAT: char = '·';

/// A single token of a regular expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Literal(char),
    Concat,
    Alternation,
    Star,
    LeftParen,
    RightParen,
}

impl Token {
    /// Classify a raw input character.
    pub fn from_char(c: char) -> Self {
        match c {
            '|' => Token::Alternation,
            '*' => Token::Star,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            CONCAT => Token::Concat,
            c => Token::Literal(c),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Token::Literal(c) => c,
            Token::Concat => CONCAT,
            Token::Alternation => '|',
            Token::Star => '*',
            Token::LeftParen => '(',
            Token::RightParen => ')',
        }
    }

    /// Binding strength of an operator. Parentheses bind weakest so that an
    /// open group is never popped by an operator.
    pub fn precedence(self) -> u8 {
        match self {
            Token::Star => 3,
            Token::Concat => 2,
            Token::Alternation => 1,
            Token::Literal(_) | Token::LeftParen | Token::RightParen => 0,
        }
    }

    /// Whether a concatenation must follow this token when the next token
    /// starts an operand.
    fn ends_operand(self) -> bool {
        matches!(self, Token::Literal(_) | Token::RightParen | Token::Star)
    }

    fn starts_operand(self) -> bool {
        matches!(self, Token::Literal(_) | Token::LeftParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A token together with the char index it came from in the source expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

impl Spanned {
    pub fn new(token: Token, position: usize) -> Self {
        Self { token, position }
    }
}

/// Tokenize `regex`, inserting an explicit [`Token::Concat`] between every
/// pair of adjacent tokens where the left one ends an operand and the right
/// one starts one. An inserted concatenation takes the position of the token
/// that follows it.
pub fn expand_concatenation(regex: &str) -> Vec<Spanned> {
    let mut expanded = Vec::with_capacity(regex.len() * 2);
    let mut previous: Option<Token> = None;

    for (position, c) in regex.chars().enumerate() {
        let token = Token::from_char(c);
        if previous.is_some_and(Token::ends_operand) && token.starts_operand() {
            expanded.push(Spanned::new(Token::Concat, position));
        }
        expanded.push(Spanned::new(token, position));
        previous = Some(token);
    }

    expanded
}

/// Render a token sequence back to text.
pub fn render(tokens: &[Spanned]) -> String {
    tokens.iter().map(|t| t.token.as_char()).collect()
}
