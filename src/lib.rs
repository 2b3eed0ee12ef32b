//! Positional boolean rules for conditional form logic.
//!
//! A rule like `"1A&2B"` asks "is position 1 answered with its choice A,
//! and position 2 with its choice B". Rules are parsed and validated once
//! into a reusable [`Rule`], then evaluated against caller-supplied
//! values and choices to decide whether a field should be shown or
//! required.

mod error;
mod evaluate;
mod parse;
mod types;
mod warn;

pub use error::{EvalError, ShowifError};
pub use parse::InvalidRuleError;
pub use types::{Calculator, Context, DefaultCalculator, RefToken, Rule, Value};
pub use warn::{set_warnings, warnings_enabled};

/// Construct a rule and evaluate it against `ctx` in one call.
///
/// Convenience for one-off checks; parse the rule once with
/// [`Rule::new`] when it will be evaluated repeatedly.
///
/// # Errors
///
/// Returns [`ShowifError`] on construction or evaluation failure.
pub fn check(rule: &str, ctx: &Context) -> Result<bool, ShowifError> {
    let rule = Rule::new(rule)?;
    Ok(rule.evaluate(ctx)?)
}
