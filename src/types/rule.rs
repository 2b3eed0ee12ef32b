use std::fmt;

use crate::error::EvalError;
use crate::parse::{self, InvalidRuleError};

use super::calculator::Calculator;
use super::context::Context;
use super::token::RefToken;

/// A validated, reusable rule template.
///
/// Construction tokenizes and structurally validates the rule string
/// once, so evaluation can only fail on the data side. A `Rule` is
/// immutable afterwards and may be shared freely — including across
/// threads behind `Arc` — and evaluated any number of times against
/// different [`Context`]s.
///
/// # Example
///
/// ```
/// use showif::{Context, Rule, Value};
///
/// let rule = Rule::new("1A&2B")?;
/// let ctx = Context::with_default_calculator()
///     .choices(vec![
///         Some(vec![Value::from("red"), Value::from("green")]),
///         Some(vec![Value::from("s"), Value::from("m")]),
///     ])
///     .values(vec![Value::from("red"), Value::from("m")]);
/// assert!(rule.evaluate(&ctx)?);
/// # Ok::<(), showif::ShowifError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub(crate) source: String,
    pub(crate) tokens: Vec<RefToken>,
    pub(crate) segments: Vec<String>,
}

impl Rule {
    /// Parse and validate a rule string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRuleError`] if the string contains no positional
    /// reference, an operator segment steps outside `()|&!`, or the
    /// expression shape is malformed (unbalanced parentheses, dangling
    /// operators, empty groups).
    pub fn new(rule: &str) -> Result<Self, InvalidRuleError> {
        match parse::parse(rule) {
            Ok(parsed) => Ok(Self {
                source: rule.to_owned(),
                tokens: parsed.tokens,
                segments: parsed.segments,
            }),
            Err(err) => {
                crate::warn::invalid_rule(rule);
                Err(err)
            }
        }
    }

    /// The original rule text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The positional references, in order of appearance.
    #[must_use]
    pub fn tokens(&self) -> &[RefToken] {
        &self.tokens
    }

    /// Evaluate against a context using its installed calculator.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::RequiredField`] when choices, values, or a
    /// calculator are missing (checked in that order) or the calculator
    /// refuses a shape combination; [`EvalError::UnsafeExpression`] /
    /// [`EvalError::Invalid`] when the substituted template fails its
    /// safety checks.
    pub fn evaluate(&self, ctx: &Context) -> Result<bool, EvalError> {
        crate::evaluate::evaluate(self, ctx, None)
    }

    /// Evaluate with a per-call calculator override, leaving the
    /// context's calculator untouched.
    ///
    /// # Errors
    ///
    /// Same conditions as [`evaluate`](Self::evaluate); the override
    /// satisfies the calculator requirement.
    pub fn evaluate_with(
        &self,
        ctx: &Context,
        calculator: &dyn Calculator,
    ) -> Result<bool, EvalError> {
        crate::evaluate::evaluate(self, ctx, Some(calculator))
    }

    /// Interleave the literal segments with one boolean literal per token.
    pub(crate) fn substitute(&self, resolved: &[bool]) -> String {
        let mut expr = String::with_capacity(self.source.len() + resolved.len() * 4);
        for (i, segment) in self.segments.iter().enumerate() {
            expr.push_str(segment);
            if let Some(b) = resolved.get(i) {
                expr.push_str(if *b { "true" } else { "false" });
            }
        }
        expr
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
