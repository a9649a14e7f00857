//! Single-predicate invocation units.
//!
//! An invocation unit adapts one `(predicate, context)` pair into a
//! schedulable task with exactly one [`PredicateOutcome`]. Failure is a
//! normal result value here, never a raised fault: the worker pool must
//! survive any individual predicate.

use tracing::warn;

use crate::context::RequestContext;
use crate::outcome::PredicateOutcome;
use crate::predicate::TargetingPredicate;

/// Run one predicate against the shared context.
///
/// Errors are contained at this boundary and reported as
/// [`PredicateOutcome::EvaluationFailed`]; the underlying error is handed to
/// the tracing subscriber rather than the caller. Panics are contained one
/// level up, at the spawned-task boundary.
pub(crate) async fn invoke(
    predicate: &dyn TargetingPredicate,
    context: &RequestContext,
) -> PredicateOutcome {
    match predicate.evaluate(context).await {
        Ok(matched) => PredicateOutcome::from(matched),
        Err(error) => {
            warn!(%error, "predicate evaluation failed");
            PredicateOutcome::EvaluationFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PredicateError, PredicateResult};
    use async_trait::async_trait;

    struct Fixed(bool);

    #[async_trait]
    impl TargetingPredicate for Fixed {
        async fn evaluate(&self, _context: &RequestContext) -> PredicateResult<bool> {
            Ok(self.0)
        }
    }

    struct Failing;

    #[async_trait]
    impl TargetingPredicate for Failing {
        async fn evaluate(&self, _context: &RequestContext) -> PredicateResult<bool> {
            Err(PredicateError::UnrecognizedCustomer)
        }
    }

    fn context() -> RequestContext {
        RequestContext::new(Some("c1".to_string()), "US")
    }

    #[tokio::test]
    async fn test_true_and_false_map_to_outcomes() {
        assert_eq!(invoke(&Fixed(true), &context()).await, PredicateOutcome::True);
        assert_eq!(invoke(&Fixed(false), &context()).await, PredicateOutcome::False);
    }

    #[tokio::test]
    async fn test_error_becomes_evaluation_failed_not_a_fault() {
        let outcome = invoke(&Failing, &context()).await;
        assert_eq!(outcome, PredicateOutcome::EvaluationFailed);
    }
}
