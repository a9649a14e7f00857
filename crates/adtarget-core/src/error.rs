//! Error types for predicate evaluation.

use thiserror::Error;

/// Errors a predicate may raise while evaluating a request context.
///
/// None of these ever escape [`TargetingEvaluator::evaluate`]; the evaluator
/// folds them into a failed outcome at the invocation boundary.
///
/// [`TargetingEvaluator::evaluate`]: crate::evaluator::TargetingEvaluator::evaluate
#[derive(Debug, Error)]
pub enum PredicateError {
    /// The predicate requires a recognized customer and the context has none.
    #[error("request context does not identify a recognized customer")]
    UnrecognizedCustomer,

    /// The customer profile is missing data the predicate needs.
    #[error("customer profile has no {field} data")]
    MissingProfileData { field: &'static str },

    /// Bubbled-up failure from inside a predicate implementation.
    #[error("predicate internal failure: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Convenience result alias.
pub type PredicateResult<T> = std::result::Result<T, PredicateError>;
