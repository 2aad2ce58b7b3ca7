//! Constraint selection for peer dependency ranges.

use crate::constants::DISJUNCTION_DELIMITER;

/// Pick the first alternative of a possibly-disjunctive constraint.
///
/// `"^1.2.0 || ^2.0.0"` becomes `"^1.2.0"`. The result is not validated;
/// the installer is the final arbiter of what a valid range is.
pub fn select_constraint(raw: &str) -> &str {
    raw.split(DISJUNCTION_DELIMITER)
        .next()
        .unwrap_or(raw)
        .trim()
}
