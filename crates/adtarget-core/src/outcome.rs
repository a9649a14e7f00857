//! Per-predicate evaluation outcomes.

use serde::{Deserialize, Serialize};

/// Result of evaluating a single predicate.
///
/// `EvaluationFailed` is distinct from a logical `False`: it records that the
/// predicate could not produce an answer at all. The distinction is visible
/// to diagnostics and tests; the aggregation boundary folds both into a
/// rejected group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateOutcome {
    /// The predicate matched the request context.
    True,
    /// The predicate did not match.
    False,
    /// The predicate raised an error or its invocation unit died.
    EvaluationFailed,
}

impl PredicateOutcome {
    /// Whether this outcome counts toward an all-true aggregate.
    pub fn is_true(self) -> bool {
        matches!(self, PredicateOutcome::True)
    }
}

impl From<bool> for PredicateOutcome {
    fn from(matched: bool) -> Self {
        if matched {
            PredicateOutcome::True
        } else {
            PredicateOutcome::False
        }
    }
}
