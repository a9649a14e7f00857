//! Negation combinator for targeting predicates.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use adtarget_core::{PredicateResult, RequestContext, TargetingPredicate};

/// Negates the boolean result of any predicate.
///
/// Failures pass through unchanged: a predicate that cannot answer still
/// cannot answer when inverted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Inverse<P> {
    inner: P,
}

impl<P> Inverse<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: TargetingPredicate> TargetingPredicate for Inverse<P> {
    async fn evaluate(&self, context: &RequestContext) -> PredicateResult<bool> {
        self.inner.evaluate(context).await.map(|matched| !matched)
    }
}
