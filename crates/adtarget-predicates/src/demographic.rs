//! Predicates over declared customer attributes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use adtarget_core::{
    AgeRange, PredicateError, PredicateResult, RequestContext, TargetingPredicate,
};

/// Matches when the request identifies a known customer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RecognizedPredicate;

#[async_trait]
impl TargetingPredicate for RecognizedPredicate {
    async fn evaluate(&self, context: &RequestContext) -> PredicateResult<bool> {
        Ok(context.is_recognized())
    }
}

/// Matches customers whose declared age range equals the target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgePredicate {
    target: AgeRange,
}

impl AgePredicate {
    pub fn new(target: AgeRange) -> Self {
        Self { target }
    }
}

#[async_trait]
impl TargetingPredicate for AgePredicate {
    async fn evaluate(&self, context: &RequestContext) -> PredicateResult<bool> {
        if !context.is_recognized() {
            return Err(PredicateError::UnrecognizedCustomer);
        }
        let age_range = context
            .profile
            .age_range
            .ok_or(PredicateError::MissingProfileData { field: "age range" })?;
        Ok(age_range == self.target)
    }
}

/// Matches customers who have declared themselves parents.
///
/// Wrap in [`crate::Inverse`] to target declared non-parents. A customer who
/// never answered the question is missing data, not a non-parent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ParentPredicate;

#[async_trait]
impl TargetingPredicate for ParentPredicate {
    async fn evaluate(&self, context: &RequestContext) -> PredicateResult<bool> {
        if !context.is_recognized() {
            return Err(PredicateError::UnrecognizedCustomer);
        }
        let parent = context
            .profile
            .parent
            .ok_or(PredicateError::MissingProfileData {
                field: "parenthood",
            })?;
        Ok(parent)
    }
}

/// Matches customers entitled to a specific prime benefit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimeBenefitPredicate {
    benefit: String,
}

impl PrimeBenefitPredicate {
    pub fn new(benefit: impl Into<String>) -> Self {
        Self {
            benefit: benefit.into(),
        }
    }
}

#[async_trait]
impl TargetingPredicate for PrimeBenefitPredicate {
    async fn evaluate(&self, context: &RequestContext) -> PredicateResult<bool> {
        if !context.is_recognized() {
            return Err(PredicateError::UnrecognizedCustomer);
        }
        Ok(context
            .profile
            .prime_benefits
            .iter()
            .any(|b| b == &self.benefit))
    }
}
