use proptest::prelude::*;
use showif::{Context, Rule, Value};

/// Generate a syntactically valid rule string: leaf references combined
/// with `&`, `|`, `!`, and parentheses.
fn arb_rule() -> impl Strategy<Value = String> {
    let leaf = (1_u32..=9, proptest::option::of(0_u8..5)).prop_map(|(position, choice)| {
        let mut s = position.to_string();
        if let Some(c) = choice {
            s.push(char::from(b'A' + c));
        }
        s
    });
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{a}&{b}")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{a}|{b}")),
            inner.clone().prop_map(|a| format!("!({a})")),
            inner.prop_map(|a| format!("({a})")),
        ]
    })
}

/// A context where every referenced position and choice letter is
/// defined, so evaluation can only produce a boolean.
fn full_context(seed: &[u8]) -> Context {
    const LETTERS: [&str; 5] = ["A", "B", "C", "D", "E"];
    let choices = (0..9)
        .map(|_| Some(LETTERS.iter().map(|l| Value::from(*l)).collect()))
        .collect();
    let values = seed
        .iter()
        .map(|&s| {
            if s as usize >= LETTERS.len() {
                Value::Missing
            } else {
                Value::from(LETTERS[s as usize])
            }
        })
        .collect();
    Context::with_default_calculator()
        .choices(choices)
        .values(values)
}

proptest! {
    /// Construction must reject or accept, never panic, on any input.
    #[test]
    fn construction_never_panics(rule in ".*") {
        let _ = Rule::new(&rule);
    }

    /// Inputs with no digits reference no position and are rejected.
    #[test]
    fn referenceless_inputs_rejected(rule in "[a-zA-Z()|&! ]{0,16}") {
        prop_assume!(!rule.chars().any(|c| c.is_ascii_digit()));
        prop_assert!(Rule::new(&rule).is_err());
    }

    /// A character outside the rule alphabet poisons the whole rule,
    /// wherever it lands.
    #[test]
    fn foreign_characters_always_rejected(
        pos in 0_usize..=8,
        c in proptest::sample::select(&['a', 'z', '*', '+', '%', '=', '~', ';'][..]),
    ) {
        let mut rule = "1A&2B|3C".to_owned();
        rule.insert(pos, c);
        prop_assert!(Rule::new(&rule).is_err());
    }

    /// Generated well-formed rules always construct.
    #[test]
    fn valid_rules_always_construct(rule in arb_rule()) {
        prop_assert!(Rule::new(&rule).is_ok(), "rejected {rule:?}");
    }

    /// Evaluation of a fully populated context never errors and is
    /// idempotent.
    #[test]
    fn evaluation_is_idempotent(
        rule in arb_rule(),
        seed in proptest::collection::vec(0_u8..6, 9),
    ) {
        let rule = Rule::new(&rule).unwrap();
        let ctx = full_context(&seed);
        let first = rule.evaluate(&ctx).unwrap();
        let second = rule.evaluate(&ctx).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A rule and its parenthesized form agree everywhere.
    #[test]
    fn parentheses_around_whole_rule_are_neutral(
        rule in arb_rule(),
        seed in proptest::collection::vec(0_u8..6, 9),
    ) {
        let plain = Rule::new(&rule).unwrap();
        let wrapped = Rule::new(&format!("({rule})")).unwrap();
        let ctx = full_context(&seed);
        prop_assert_eq!(
            plain.evaluate(&ctx).unwrap(),
            wrapped.evaluate(&ctx).unwrap()
        );
    }
}
