use showif::Rule;

#[test]
fn single_reference() {
    let rule = Rule::new("1A").unwrap();
    assert_eq!(rule.tokens().len(), 1);
    assert_eq!(rule.tokens()[0].position(), 0);
    assert_eq!(rule.tokens()[0].choice(), Some(0));
    assert_eq!(rule.source(), "1A");
}

#[test]
fn free_input_reference() {
    let rule = Rule::new("3").unwrap();
    assert_eq!(rule.tokens()[0].position(), 2);
    assert_eq!(rule.tokens()[0].choice(), None);
}

#[test]
fn multi_digit_position() {
    let rule = Rule::new("12C").unwrap();
    assert_eq!(rule.tokens()[0].position(), 11);
    assert_eq!(rule.tokens()[0].choice(), Some(2));
}

#[test]
fn compound_rule_token_order() {
    let rule = Rule::new("1A&2B|!(3C&(4))").unwrap();
    let positions: Vec<usize> = rule.tokens().iter().map(|t| t.position()).collect();
    assert_eq!(positions, vec![0, 1, 2, 3]);
    let spelled: Vec<String> = rule.tokens().iter().map(ToString::to_string).collect();
    assert_eq!(spelled, vec!["1A", "2B", "3C", "4"]);
}

#[test]
fn whitespace_between_operators_is_fine() {
    assert!(Rule::new(" 1A & 2B ").is_ok());
    assert!(Rule::new("! ( 1A | 2B )").is_ok());
}

#[test]
fn unexpected_operator_rejected() {
    assert!(Rule::new("108*23").is_err());
    assert!(Rule::new("1A+2B").is_err());
    assert!(Rule::new("1A=2B").is_err());
}

#[test]
fn lowercase_letter_rejected() {
    // Only a single trailing uppercase letter names a choice.
    assert!(Rule::new("1a").is_err());
    assert!(Rule::new("1Ab").is_err());
}

#[test]
fn unbalanced_parentheses_rejected() {
    assert!(Rule::new("1A&2B)").is_err());
    assert!(Rule::new("(1A&2B").is_err());
    assert!(Rule::new("1A)").is_err());
}

#[test]
fn dangling_operators_rejected() {
    assert!(Rule::new("1A&").is_err());
    assert!(Rule::new("|1A").is_err());
    assert!(Rule::new("1A&&2B").is_err());
    assert!(Rule::new("1A|").is_err());
}

#[test]
fn adjacent_references_rejected() {
    // Two references with no operator between them reduce to `truetrue`.
    assert!(Rule::new("1A2B").is_err());
}

#[test]
fn empty_and_referenceless_rules_rejected() {
    assert!(Rule::new("").is_err());
    assert!(Rule::new("abc").is_err());
    assert!(Rule::new("&|!()").is_err());
}

#[test]
fn position_zero_rejected() {
    // Positions are one-based in rule text; `0` references nothing.
    assert!(Rule::new("0A").is_err());
    assert!(Rule::new("1A&0B").is_err());
}

#[test]
fn error_carries_rule_and_reason() {
    let err = Rule::new("108*23").unwrap_err();
    assert_eq!(err.rule(), "108*23");
    assert!(err.to_string().contains("invalid rule '108*23'"));
}

#[test]
fn double_negation_accepted() {
    assert!(Rule::new("!!1A").is_ok());
    assert!(Rule::new("!(!1A)").is_ok());
}

#[test]
fn rules_are_cheaply_cloneable_and_comparable() {
    let rule = Rule::new("1A&2B").unwrap();
    assert_eq!(rule.clone(), rule);
}
