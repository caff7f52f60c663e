use proptest::prelude::*;
use rexdfa::{DFA, NFA, StateSet, compile, to_dfa};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Ast {
    Literal(char),
    Concat(Box<Ast>, Box<Ast>),
    Alternation(Box<Ast>, Box<Ast>),
    Star(Box<Ast>),
}

impl Ast {
    /// Render with the fewest parentheses the precedence rules allow.
    fn render(&self, context: u8) -> String {
        let (own, text) = match self {
            Ast::Literal(c) => return c.to_string(),
            Ast::Concat(l, r) => (2, format!("{}{}", l.render(2), r.render(2))),
            Ast::Alternation(l, r) => (1, format!("{}|{}", l.render(1), r.render(1))),
            Ast::Star(inner) => (3, format!("{}*", inner.render(3))),
        };
        if own < context {
            format!("({text})")
        } else {
            text
        }
    }

    /// Render with every subexpression grouped.
    fn render_grouped(&self) -> String {
        match self {
            Ast::Literal(c) => c.to_string(),
            Ast::Concat(l, r) => format!("({})({})", l.render_grouped(), r.render_grouped()),
            Ast::Alternation(l, r) => format!("({}|{})", l.render_grouped(), r.render_grouped()),
            Ast::Star(inner) => format!("({})*", inner.render_grouped()),
        }
    }

    /// Every position in `input` where a match starting at `start` can end.
    fn ends(&self, input: &[char], start: usize) -> BTreeSet<usize> {
        match self {
            Ast::Literal(c) => {
                if input.get(start) == Some(c) {
                    BTreeSet::from([start + 1])
                } else {
                    BTreeSet::new()
                }
            }
            Ast::Concat(l, r) => l
                .ends(input, start)
                .into_iter()
                .flat_map(|mid| r.ends(input, mid))
                .collect(),
            Ast::Alternation(l, r) => {
                let mut ends = l.ends(input, start);
                ends.extend(r.ends(input, start));
                ends
            }
            Ast::Star(inner) => {
                let mut ends = BTreeSet::from([start]);
                let mut frontier = vec![start];
                while let Some(pos) = frontier.pop() {
                    for end in inner.ends(input, pos) {
                        if ends.insert(end) {
                            frontier.push(end);
                        }
                    }
                }
                ends
            }
        }
    }

    fn matches(&self, input: &str) -> bool {
        let chars: Vec<char> = input.chars().collect();
        self.ends(&chars, 0).contains(&chars.len())
    }
}

fn ast() -> impl Strategy<Value = Ast> {
    let leaf = prop::sample::select(vec!['a', 'b', 'c']).prop_map(Ast::Literal);
    leaf.prop_recursive(5, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Ast::Concat(Box::new(l), Box::new(r))),
            (inner.clone(), inner.clone())
                .prop_map(|(l, r)| Ast::Alternation(Box::new(l), Box::new(r))),
            inner.prop_map(|a| Ast::Star(Box::new(a))),
        ]
    })
}

fn build(regex: &str) -> (NFA, DFA) {
    let (nfa, alphabet) = compile(regex).unwrap();
    let dfa = to_dfa(&nfa, &alphabet);
    (nfa, dfa)
}

proptest! {
    #[test]
    fn dfa_matches_reference(ast in ast(), inputs in prop::collection::vec("[abcd]{0,6}", 1..16)) {
        let regex = ast.render(0);
        let (nfa, dfa) = build(&regex);
        for input in &inputs {
            let expected = ast.matches(input);
            prop_assert_eq!(dfa.accepts(input), expected, "regex {:?} on {:?}", regex, input);
            prop_assert_eq!(nfa.accepts(input), expected, "regex {:?} on {:?}", regex, input);
        }
    }

    #[test]
    fn grouping_does_not_change_language(ast in ast(), inputs in prop::collection::vec("[abc]{0,5}", 1..16)) {
        let (_, minimal) = build(&ast.render(0));
        let (_, grouped) = build(&ast.render_grouped());
        for input in &inputs {
            prop_assert_eq!(minimal.accepts(input), grouped.accepts(input));
        }
    }

    #[test]
    fn construction_is_deterministic(ast in ast()) {
        let regex = ast.render(0);
        let (_, first) = build(&regex);
        let (_, second) = build(&regex);
        prop_assert_eq!(first.num_states(), second.num_states());
        prop_assert_eq!(first.final_states(), second.final_states());
        prop_assert_eq!(
            first.transitions().collect::<Vec<_>>(),
            second.transitions().collect::<Vec<_>>()
        );
    }

    #[test]
    fn dfa_states_are_distinct_closed_sets(ast in ast()) {
        let (nfa, dfa) = build(&ast.render(0));
        let mut seen = BTreeSet::new();
        for state in 0..dfa.num_states() {
            let nfa_states = dfa.nfa_states(state).unwrap();
            prop_assert!(!nfa_states.is_empty());
            prop_assert_eq!(&nfa.epsilon_closure(nfa_states), nfa_states);
            prop_assert!(seen.insert(nfa_states.to_vec()));
            prop_assert_eq!(dfa.is_final(state), nfa_states.contains(nfa.accept_state()));
        }
        for (src, _, dst) in dfa.transitions() {
            prop_assert!(src < dfa.num_states());
            prop_assert!(dst < dfa.num_states());
        }
    }

    #[test]
    fn epsilon_closure_is_idempotent(ast in ast(), picks in prop::collection::vec(any::<u32>(), 0..6)) {
        let (nfa, _) = build(&ast.render(0));
        let states: StateSet = picks.into_iter().map(|p| p % nfa.num_states()).collect();
        let once = nfa.epsilon_closure(&states);
        prop_assert_eq!(&nfa.epsilon_closure(&once), &once);
        for state in states.iter() {
            prop_assert!(once.contains(state));
        }
    }
}
