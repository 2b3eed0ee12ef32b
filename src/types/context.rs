use std::fmt;

use super::calculator::{Calculator, DefaultCalculator};
use super::value::Value;

/// Per-evaluation data: the values under test, the enumerated choices,
/// the comparison policy, and the other-slot flag.
///
/// A context is independent of any [`Rule`](crate::Rule); build one per
/// evaluation (or reuse it across calls) and pass it by reference. The
/// engine never caches context data between calls.
pub struct Context {
    pub(crate) choices: Option<Vec<Option<Vec<Value>>>>,
    pub(crate) values: Option<Vec<Value>>,
    pub(crate) calculator: Option<Box<dyn Calculator>>,
    pub(crate) other: bool,
}

impl Context {
    /// Create an empty context: no choices, no values, no calculator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            choices: None,
            values: None,
            calculator: None,
            other: false,
        }
    }

    /// Create a context pre-loaded with the [`DefaultCalculator`].
    #[must_use]
    pub fn with_default_calculator() -> Self {
        Self::new().calculator(DefaultCalculator)
    }

    /// Set the choice lists, indexed by position. `None` entries mean the
    /// position has no enumerated choices.
    #[must_use]
    pub fn choices(mut self, choices: Vec<Option<Vec<Value>>>) -> Self {
        self.choices = Some(choices);
        self
    }

    /// Set the values under test, indexed by position. Positions past the
    /// end of the vector read as [`Value::Missing`].
    #[must_use]
    pub fn values(mut self, values: Vec<Value>) -> Self {
        self.values = Some(values);
        self
    }

    /// Install a comparison policy.
    #[must_use]
    pub fn calculator(mut self, calculator: impl Calculator + 'static) -> Self {
        self.calculator = Some(Box::new(calculator));
        self
    }

    /// Enable or disable other-slot interpretation: when set, a choice
    /// index exactly one past the end of a position's choice list reads as
    /// "the value matches none of the enumerated choices".
    #[must_use]
    pub fn other(mut self, other: bool) -> Self {
        self.other = other;
        self
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("choices", &self.choices)
            .field("values", &self.values)
            .field("calculator", &self.calculator.is_some())
            .field("other", &self.other)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let ctx = Context::new();
        assert!(ctx.choices.is_none());
        assert!(ctx.values.is_none());
        assert!(ctx.calculator.is_none());
        assert!(!ctx.other);
    }

    #[test]
    fn with_default_calculator_installs_one() {
        let ctx = Context::with_default_calculator();
        assert!(ctx.calculator.is_some());
    }

    #[test]
    fn builder_sets_fields() {
        let ctx = Context::new()
            .choices(vec![Some(vec![Value::from("A")]), None])
            .values(vec![Value::from("A")])
            .other(true);
        assert_eq!(ctx.choices.as_ref().map(Vec::len), Some(2));
        assert_eq!(ctx.values.as_ref().map(Vec::len), Some(1));
        assert!(ctx.other);
    }

    #[test]
    fn debug_hides_calculator_internals() {
        let repr = format!("{:?}", Context::with_default_calculator());
        assert!(repr.contains("calculator: true"));
    }
}
