//! Targeting groups - ordered predicate collections gating one advertisement.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::predicate::TargetingPredicate;

/// An ordered collection of predicates that together gate the eligibility of
/// one piece of ad content for a request context.
///
/// Predicate order is preserved for deterministic result reduction; execution
/// order during evaluation is unspecified.
#[derive(Clone)]
pub struct TargetingGroup {
    targeting_group_id: Uuid,
    content_id: String,
    click_through_rate: f64,
    predicates: Vec<Arc<dyn TargetingPredicate>>,
}

impl TargetingGroup {
    /// Create a group with a freshly minted id.
    pub fn new(
        content_id: impl Into<String>,
        click_through_rate: f64,
        predicates: Vec<Arc<dyn TargetingPredicate>>,
    ) -> Self {
        Self {
            targeting_group_id: Uuid::new_v4(),
            content_id: content_id.into(),
            click_through_rate,
            predicates,
        }
    }

    /// Create a group with a known id, e.g. one loaded from storage.
    pub fn with_id(
        targeting_group_id: Uuid,
        content_id: impl Into<String>,
        click_through_rate: f64,
        predicates: Vec<Arc<dyn TargetingPredicate>>,
    ) -> Self {
        Self {
            targeting_group_id,
            content_id: content_id.into(),
            click_through_rate,
            predicates,
        }
    }

    pub fn targeting_group_id(&self) -> Uuid {
        self.targeting_group_id
    }

    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    /// Observed click-through rate for the gated content.
    pub fn click_through_rate(&self) -> f64 {
        self.click_through_rate
    }

    /// Predicates in their original, reduction-relevant order.
    pub fn predicates(&self) -> &[Arc<dyn TargetingPredicate>] {
        &self.predicates
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl fmt::Debug for TargetingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetingGroup")
            .field("targeting_group_id", &self.targeting_group_id)
            .field("content_id", &self.content_id)
            .field("click_through_rate", &self.click_through_rate)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}
