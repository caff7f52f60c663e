//! Shunting-yard conversion of an expanded expression to postfix form.

use crate::error::{Error, Malformed, Result};
use crate::regex::token::{Spanned, Token};

/// Convert an expanded token sequence (see
/// [`expand_concatenation`](crate::regex::expand_concatenation)) to postfix
/// order. Parentheses are checked for balance and never appear in the output.
pub fn to_postfix(expanded: &[Spanned]) -> Result<Vec<Spanned>> {
    let mut output = Vec::with_capacity(expanded.len());
    let mut operators: Vec<Spanned> = Vec::new();

    for &item in expanded {
        match item.token {
            Token::Literal(_) => output.push(item),
            Token::LeftParen => operators.push(item),
            Token::RightParen => loop {
                match operators.pop() {
                    Some(Spanned {
                        token: Token::LeftParen,
                        ..
                    }) => break,
                    Some(op) => output.push(op),
                    None => {
                        return Err(Error::malformed(
                            item.position,
                            Malformed::UnmatchedRightParen,
                        ));
                    }
                }
            },
            Token::Concat | Token::Alternation | Token::Star => {
                while let Some(&top) = operators.last() {
                    if top.token.precedence() < item.token.precedence() {
                        break;
                    }
                    output.push(top);
                    operators.pop();
                }
                operators.push(item);
            }
        }
    }

    while let Some(op) = operators.pop() {
        if op.token == Token::LeftParen {
            return Err(Error::malformed(op.position, Malformed::UnmatchedLeftParen));
        }
        output.push(op);
    }

    Ok(output)
}
