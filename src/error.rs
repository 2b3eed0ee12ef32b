use thiserror::Error;

use crate::parse::InvalidRuleError;

/// Errors raised while evaluating a rule against a context.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A required piece of evaluation state was never supplied, or the
    /// built-in calculator refuses to compare the shapes it was given
    /// (in which case `field` is `"calculator"` — supply a custom one).
    #[error("'{field}' is required")]
    RequiredField { field: &'static str },

    /// The substituted expression contained content outside the operator
    /// and literal alphabet. The template no longer matches what was
    /// validated at construction; treated as a security violation and
    /// never reduced.
    #[error("unsafe content '{found}' in substituted expression")]
    UnsafeExpression { found: char },

    /// The substituted expression passed the alphabet check but did not
    /// reduce to a single boolean.
    #[error(transparent)]
    Invalid(#[from] InvalidRuleError),
}

/// Unified error type covering construction and evaluation.
///
/// Returned by the one-shot [`check()`](crate::check) helper.
#[derive(Debug, Error)]
pub enum ShowifError {
    #[error(transparent)]
    Rule(#[from] InvalidRuleError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
