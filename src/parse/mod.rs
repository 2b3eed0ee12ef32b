mod error;
mod grammar;
mod parser;

pub use error::InvalidRuleError;
pub(crate) use parser::ParsedRule;

use winnow::Parser;

/// Tokenize and structurally validate a rule string.
///
/// Validation happens once, here: every operator segment must stay inside
/// the `()|&!` alphabet (whitespace aside), and the template — with every
/// reference read as `true` — must reduce to a single boolean. Rules that
/// pass can only fail on the data side at evaluation time.
pub(crate) fn parse(rule: &str) -> Result<ParsedRule, InvalidRuleError> {
    if !rule.chars().any(|c| c.is_ascii_digit()) {
        return Err(InvalidRuleError::new(rule, "rule references no position"));
    }

    let parsed = grammar::template
        .parse(rule)
        .map_err(|_| InvalidRuleError::new(rule, "invalid positional reference"))?;

    for segment in &parsed.segments {
        if !is_operator_text(segment) {
            return Err(InvalidRuleError::new(
                rule,
                format!("unexpected operator text {:?}", segment.trim()),
            ));
        }
    }

    reduce(&all_true_probe(&parsed.segments))
        .map_err(|_| InvalidRuleError::new(rule, "malformed boolean expression"))?;

    Ok(parsed)
}

/// Reduce a fully substituted boolean expression to its value.
pub(crate) fn reduce(expr: &str) -> Result<bool, InvalidRuleError> {
    grammar::bool_expr
        .parse(expr)
        .map(|ast| ast.eval())
        .map_err(|_| InvalidRuleError::new(expr, "malformed boolean expression"))
}

/// Operator alphabet permitted between references.
fn is_operator_text(segment: &str) -> bool {
    segment
        .chars()
        .all(|c| matches!(c, '(' | ')' | '|' | '&' | '!') || c.is_whitespace())
}

/// The construction-time probe: every reference substituted with `true`.
fn all_true_probe(segments: &[String]) -> String {
    let mut expr = String::new();
    for (i, segment) in segments.iter().enumerate() {
        expr.push_str(segment);
        if i + 1 < segments.len() {
            expr.push_str("true");
        }
    }
    expr
}
