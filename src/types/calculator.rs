use crate::error::EvalError;

use super::value::Value;

/// Pluggable comparison policy deciding whether a value satisfies a choice.
///
/// `choice` is `None` for free-input references ("is this position
/// answered at all"). `excludes` is only supplied on the other-slot path
/// and carries the enumerated choices the value must fall outside of.
///
/// Closures of the matching shape implement this trait, so a one-off
/// policy can be passed inline to
/// [`Rule::evaluate_with`](crate::Rule::evaluate_with).
pub trait Calculator {
    /// Decide whether `value` satisfies `choice`.
    ///
    /// # Errors
    ///
    /// Implementations may return [`EvalError`] for combinations they
    /// refuse to compare.
    fn compare(
        &self,
        value: &Value,
        choice: Option<&Value>,
        excludes: Option<&[Value]>,
    ) -> Result<bool, EvalError>;
}

impl<F> Calculator for F
where
    F: Fn(&Value, Option<&Value>, Option<&[Value]>) -> Result<bool, EvalError>,
{
    fn compare(
        &self,
        value: &Value,
        choice: Option<&Value>,
        excludes: Option<&[Value]>,
    ) -> Result<bool, EvalError> {
        self(value, choice, excludes)
    }
}

/// The built-in comparison policy.
///
/// In priority order: empty string and empty sequence values only match an
/// equally empty choice; missing values match nothing; against a defined
/// choice, same-shape scalars compare by equality (numerics cross-type)
/// and sequence values by membership; without a choice, the value is
/// tested for presence, restricted by `excludes` when supplied.
///
/// Shape combinations with no defensible comparison (say, a boolean value
/// against a string choice) are refused with
/// [`EvalError::RequiredField`]`("calculator")` — supply a custom
/// [`Calculator`] instead of letting the engine guess.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCalculator;

impl Calculator for DefaultCalculator {
    fn compare(
        &self,
        value: &Value,
        choice: Option<&Value>,
        excludes: Option<&[Value]>,
    ) -> Result<bool, EvalError> {
        // Empty string and empty sequence are symmetric: they only match
        // an equally empty choice, never "unanswered".
        if matches!(value, Value::Str(s) if s.is_empty()) {
            return Ok(matches!(choice, Some(Value::Str(c)) if c.is_empty()));
        }
        if matches!(value, Value::Seq(s) if s.is_empty()) {
            return Ok(matches!(choice, Some(Value::Seq(c)) if c.is_empty()));
        }
        if value.is_missing() {
            return Ok(false);
        }

        match choice {
            Some(choice) => match (value, choice) {
                (Value::Seq(items), _) => Ok(items.iter().any(|item| item.loose_eq(choice))),
                (Value::Str(_), Value::Str(_))
                | (Value::Bool(_), Value::Bool(_))
                | (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                    Ok(value.loose_eq(choice))
                }
                _ => Err(EvalError::RequiredField {
                    field: "calculator",
                }),
            },
            None => match excludes {
                Some(excludes) => match value {
                    Value::Seq(items) => Ok(items
                        .iter()
                        .any(|item| !excludes.iter().any(|e| e.loose_eq(item)))),
                    scalar => Ok(scalar.is_present()
                        && !excludes.iter().any(|e| e.loose_eq(scalar))),
                },
                None => Ok(value.is_present()),
            },
        }
    }
}
