use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Take the expression from the first argument, or prompt for one line on stdin.
fn read_regex() -> Result<String> {
    if let Some(arg) = std::env::args().nth(1) {
        return Ok(arg);
    }

    print!("Enter regular expression: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read regular expression from stdin")?;
    Ok(line.trim().to_string())
}

fn main() -> Result<()> {
    let regex = read_regex()?;

    let postfix = rexdfa::postfix_of(&regex)
        .with_context(|| format!("cannot convert {regex:?} to postfix"))?;
    println!("Postfix expression: {postfix}");

    let (nfa, alphabet) =
        rexdfa::compile(&regex).with_context(|| format!("cannot compile {regex:?}"))?;
    let dfa = rexdfa::to_dfa(&nfa, &alphabet);

    println!("{nfa}");
    print!("{dfa}");
    Ok(())
}
