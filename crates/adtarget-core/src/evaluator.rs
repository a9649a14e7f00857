//! Concurrent AND-aggregation of targeting predicates.
//!
//! [`TargetingEvaluator`] fans one invocation unit per predicate out onto a
//! bounded worker pool, waits for every unit to finish, then reduces the
//! outcomes in the group's original predicate order. The wait is a full
//! barrier: an early non-match does not cancel in-flight work.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, instrument, warn};

use crate::context::RequestContext;
use crate::group::TargetingGroup;
use crate::invocation;
use crate::outcome::PredicateOutcome;

/// Default number of concurrently executing predicate evaluations.
pub const DEFAULT_POOL_SIZE: usize = 4;

/// Configuration for a [`TargetingEvaluator`].
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Maximum number of concurrently executing predicate evaluations.
    /// Excess invocation units queue for a free worker.
    pub pool_size: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

/// Evaluates targeting groups against one request context.
///
/// Each evaluator owns its worker pool: the pool is created at construction
/// and released when the evaluator drops. Pools are never shared between
/// evaluators unless the caller injects one via
/// [`TargetingEvaluator::with_shared_pool`].
pub struct TargetingEvaluator {
    context: Arc<RequestContext>,
    permits: Arc<Semaphore>,
    pool_size: usize,
}

impl TargetingEvaluator {
    /// Create an evaluator with the default pool size.
    pub fn new(context: RequestContext) -> Self {
        Self::with_config(context, EvaluatorConfig::default())
    }

    /// Create an evaluator with an explicit pool size.
    pub fn with_config(context: RequestContext, config: EvaluatorConfig) -> Self {
        // A zero-width pool would deadlock every call; treat it as one worker.
        let pool_size = config.pool_size.max(1);
        Self {
            context: Arc::new(context),
            permits: Arc::new(Semaphore::new(pool_size)),
            pool_size,
        }
    }

    /// Create an evaluator that shares a caller-owned permit pool.
    ///
    /// Intended for callers running many evaluators that should contend for
    /// one global evaluation budget. `pool_size` reports the size the pool
    /// was created with, which the caller tracks.
    pub fn with_shared_pool(
        context: RequestContext,
        permits: Arc<Semaphore>,
        pool_size: usize,
    ) -> Self {
        Self {
            context: Arc::new(context),
            permits,
            pool_size,
        }
    }

    /// The context this evaluator scores groups against.
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Maximum number of predicate evaluations in flight at once.
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Evaluate a targeting group: `true` when every predicate matches.
    ///
    /// An empty group is vacuously true. A predicate that returns an error or
    /// panics counts as a non-match; no failure escapes this method. Each
    /// call is independent - concurrent calls on one evaluator share only the
    /// permit pool, never outcome state.
    #[instrument(
        skip_all,
        fields(group_id = %group.targeting_group_id(), predicates = group.len())
    )]
    pub async fn evaluate(&self, group: &TargetingGroup) -> bool {
        if group.is_empty() {
            return true;
        }

        // Fan out: one invocation unit per predicate, each gated by a permit.
        let mut units = JoinSet::new();
        for (position, predicate) in group.predicates().iter().cloned().enumerate() {
            let context = Arc::clone(&self.context);
            let permits = Arc::clone(&self.permits);
            units.spawn(async move {
                let _permit = match permits.acquire_owned().await {
                    Ok(permit) => permit,
                    // Closed pool: report the slot as failed rather than fault.
                    Err(_) => return (position, PredicateOutcome::EvaluationFailed),
                };
                (position, invocation::invoke(predicate.as_ref(), &context).await)
            });
        }

        // Barrier: every slot starts failed, so a unit that dies without
        // reporting still accounts for exactly one outcome.
        let mut outcomes = vec![PredicateOutcome::EvaluationFailed; group.len()];
        while let Some(joined) = units.join_next().await {
            match joined {
                Ok((position, outcome)) => outcomes[position] = outcome,
                Err(error) => {
                    warn!(%error, "invocation unit died before reporting an outcome");
                }
            }
        }

        // Reduce in original predicate order.
        for (position, outcome) in outcomes.iter().enumerate() {
            if !outcome.is_true() {
                debug!(position, ?outcome, "targeting group rejected");
                return false;
            }
        }
        true
    }
}
