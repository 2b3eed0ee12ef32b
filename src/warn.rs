//! Non-fatal diagnostics.
//!
//! Missing-choice situations are reported here instead of failing the
//! whole evaluation; the affected reference contributes `false`. A
//! process-wide toggle silences the output without changing any returned
//! result.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::types::RefToken;

static WARNINGS: AtomicBool = AtomicBool::new(true);

/// Enable or disable non-fatal warning output process-wide.
pub fn set_warnings(enabled: bool) {
    WARNINGS.store(enabled, Ordering::Relaxed);
}

/// Whether non-fatal warnings are currently emitted.
#[must_use]
pub fn warnings_enabled() -> bool {
    WARNINGS.load(Ordering::Relaxed)
}

/// The rule references a position the caller supplied no choice list for.
pub(crate) fn missing_choices(rule: &str, token: &RefToken) {
    if warnings_enabled() {
        let position = token.position();
        tracing::warn!(
            rule,
            token = %token,
            "rule requires choices for position [{position}], but none were provided; \
             reference '{token}' will always evaluate to false"
        );
    }
}

/// The rule references a choice slot the position's list does not define.
pub(crate) fn missing_choice(rule: &str, token: &RefToken, choice: usize) {
    if warnings_enabled() {
        let position = token.position();
        tracing::warn!(
            rule,
            token = %token,
            "rule requires a choice at [{position}][{choice}], but none is defined; \
             reference '{token}' will always evaluate to false"
        );
    }
}

/// A rule string was rejected at construction.
pub(crate) fn invalid_rule(rule: &str) {
    if warnings_enabled() {
        tracing::warn!(
            rule,
            "rejected rule '{rule}'; if you believe this rule is valid, please open an issue"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert!(warnings_enabled());
        set_warnings(false);
        assert!(!warnings_enabled());
        set_warnings(true);
        assert!(warnings_enabled());
    }
}
