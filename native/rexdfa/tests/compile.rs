use rexdfa::regex::Token;
use rexdfa::{DFA, Error, Malformed, compile, postfix_of, to_dfa};

fn dfa(regex: &str) -> DFA {
    let (nfa, alphabet) = compile(regex).unwrap();
    to_dfa(&nfa, &alphabet)
}

fn check(regex: &str, accepted: &[&str], rejected: &[&str]) {
    let dfa = dfa(regex);
    for input in accepted {
        assert!(dfa.accepts(input), "{regex:?} should accept {input:?}");
    }
    for input in rejected {
        assert!(!dfa.accepts(input), "{regex:?} should reject {input:?}");
    }
}

#[test]
fn single_literal() {
    let (nfa, alphabet) = compile("a").unwrap();
    assert_eq!(nfa.num_states(), 2);
    assert_eq!(nfa.transitions().count(), 1);

    let dfa = to_dfa(&nfa, &alphabet);
    assert_eq!(dfa.num_states(), 2);
    assert_eq!(dfa.start_state(), Some(0));
    assert!(!dfa.is_final(0));
    assert_eq!(dfa.transitions().collect::<Vec<_>>(), vec![(0, 'a', 1)]);
    assert_eq!(dfa.final_states().to_vec(), vec![1]);
}

#[test]
fn concatenation() {
    check("ab", &["ab"], &["", "a", "b", "aba"]);
}

#[test]
fn alternation() {
    check("a|b", &["a", "b"], &["", "ab"]);
}

#[test]
fn kleene_star() {
    check("a*", &["", "a", "aaa"], &["b", "ab"]);
}

#[test]
fn grouped_star_then_literal() {
    check(
        "(a|b)*c",
        &["c", "ac", "abc", "aabbc"],
        &["", "ab", "ca"],
    );
}

#[test]
fn precedence_without_groups() {
    // '*' binds tighter than concatenation, which binds tighter than '|'.
    check("ab*|c", &["a", "abbb", "c"], &["", "ab c", "abc", "cc"]);
    check("a|bc*", &["a", "b", "bcc"], &["ac", "bb"]);
}

#[test]
fn explicit_concatenation_operator() {
    check("a·b", &["ab"], &["a", "b", "a·b"]);
    assert_eq!(postfix_of("a·b").unwrap(), "ab·");
}

#[test]
fn unknown_symbol_is_rejected() {
    let dfa = dfa("a*");
    assert_eq!(dfa.transition(0, 'z'), None);
    assert!(!dfa.accepts("az"));
}

#[test]
fn accept_states_contain_nfa_accept() {
    let (nfa, alphabet) = compile("(a|b)*abb").unwrap();
    let dfa = to_dfa(&nfa, &alphabet);
    for state in 0..dfa.num_states() {
        let nfa_states = dfa.nfa_states(state).unwrap();
        assert!(!nfa_states.is_empty());
        assert_eq!(dfa.is_final(state), nfa_states.contains(nfa.accept_state()));
    }
    // The textbook construction for this expression discovers five states.
    assert_eq!(dfa.num_states(), 5);
}

#[test]
fn postfix_forms() {
    assert_eq!(postfix_of("a").unwrap(), "a");
    assert_eq!(postfix_of("ab|c").unwrap(), "ab·c|");
    assert_eq!(postfix_of("(a|b)*c").unwrap(), "ab|*c·");
    assert_eq!(postfix_of("a(b|c)*").unwrap(), "abc|*·");
}

#[test]
fn malformed_expressions() {
    assert_eq!(
        compile(")(").unwrap_err(),
        Error::MalformedExpression {
            position: 0,
            kind: Malformed::UnmatchedRightParen,
        }
    );
    assert_eq!(
        compile("a|").unwrap_err(),
        Error::MalformedExpression {
            position: 1,
            kind: Malformed::MissingOperand(Token::Alternation),
        }
    );
    assert_eq!(
        compile("(a").unwrap_err(),
        Error::MalformedExpression {
            position: 0,
            kind: Malformed::UnmatchedLeftParen,
        }
    );
    assert!(matches!(
        compile("a**|*").unwrap_err(),
        Error::MalformedExpression { .. }
    ));
}

#[test]
fn empty_expressions() {
    assert_eq!(compile("").unwrap_err(), Error::EmptyExpression);
    assert_eq!(compile("()").unwrap_err(), Error::EmptyExpression);
    assert_eq!(postfix_of("").unwrap(), "");
}
