//! The targeting predicate capability.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::error::PredicateResult;

/// A boolean test over a request context.
///
/// Implementations must be side-effect-free with respect to the context and
/// to other predicates: the evaluator runs many of them concurrently against
/// one shared context. A predicate that cannot produce an answer returns an
/// error rather than guessing; the evaluator treats that as a non-match.
///
/// Implement this trait to plug in concrete targeting rules or test stubs.
#[async_trait]
pub trait TargetingPredicate: Send + Sync {
    /// Evaluate the predicate against `context`.
    async fn evaluate(&self, context: &RequestContext) -> PredicateResult<bool>;
}
