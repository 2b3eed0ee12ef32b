//! Per-call evaluation: token resolution, template substitution, and
//! safety-checked reduction.

use crate::error::EvalError;
use crate::types::{Calculator, Context, RefToken, Rule, Value};
use crate::{parse, warn};

pub(crate) fn evaluate(
    rule: &Rule,
    ctx: &Context,
    override_calculator: Option<&dyn Calculator>,
) -> Result<bool, EvalError> {
    // Required state is checked in a fixed order: choices, values,
    // calculator. The first gap is the one reported.
    let choices = ctx
        .choices
        .as_deref()
        .ok_or(EvalError::RequiredField { field: "choices" })?;
    let values = ctx
        .values
        .as_deref()
        .ok_or(EvalError::RequiredField { field: "values" })?;
    let calculator = override_calculator
        .or(ctx.calculator.as_deref())
        .ok_or(EvalError::RequiredField {
            field: "calculator",
        })?;

    let mut resolved = Vec::with_capacity(rule.tokens.len());
    for token in &rule.tokens {
        resolved.push(resolve(rule, token, choices, values, ctx.other, calculator)?);
    }

    let expr = rule.substitute(&resolved);
    check_substituted(&expr)?;
    parse::reduce(&expr).map_err(EvalError::Invalid)
}

/// Resolve one reference to a boolean contribution.
///
/// Missing choice lists and undefined slots never abort the evaluation:
/// they log a warning and contribute `false`, so one dangling reference
/// cannot take down an otherwise well-formed compound rule.
fn resolve(
    rule: &Rule,
    token: &RefToken,
    choices: &[Option<Vec<Value>>],
    values: &[Value],
    other: bool,
    calculator: &dyn Calculator,
) -> Result<bool, EvalError> {
    static MISSING: Value = Value::Missing;
    let value = values.get(token.position).unwrap_or(&MISSING);

    let Some(choice_index) = token.choice else {
        // Free-input reference: a bare "is this answered" query.
        return calculator.compare(value, None, None);
    };

    let Some(choice_list) = choices.get(token.position).and_then(Option::as_ref) else {
        warn::missing_choices(&rule.source, token);
        return Ok(false);
    };

    match choice_list.get(choice_index) {
        Some(choice) if !choice.is_missing() => calculator.compare(value, Some(choice), None),
        _ if other && choice_index == choice_list.len() => {
            // The slot exactly one past the last enumerated choice is the
            // canonical "other" answer: satisfied by any value outside
            // the enumerated choices.
            calculator.compare(value, None, Some(choice_list.as_slice()))
        }
        _ => {
            warn::missing_choice(&rule.source, token, choice_index);
            Ok(false)
        }
    }
}

/// Second, stricter gate over the fully substituted expression.
///
/// The template's segments were validated at construction, so anything
/// outside this alphabet means the template no longer matches what was
/// validated — refuse to reduce it.
pub(crate) fn check_substituted(expr: &str) -> Result<(), EvalError> {
    let mut rest = expr;
    while let Some(c) = rest.chars().next() {
        if let Some(stripped) = rest
            .strip_prefix("true")
            .or_else(|| rest.strip_prefix("false"))
        {
            rest = stripped;
        } else if matches!(c, '(' | ')' | '|' | '&' | '!') || c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
        } else {
            return Err(EvalError::UnsafeExpression { found: c });
        }
    }
    Ok(())
}
