//! Front end: tokenizing, concatenation expansion and postfix conversion.

mod postfix;
mod token;

pub use postfix::to_postfix;
pub use token::{CONCAT, Spanned, Token, expand_concatenation, render};

use crate::error::Result;

/// The postfix form of `regex`, with `·` as the concatenation operator.
pub fn postfix_of(regex: &str) -> Result<String> {
    let postfix = to_postfix(&expand_concatenation(regex))?;
    Ok(render(&postfix))
}
