//! Predicates over per-category purchase history.
//!
//! An absent category entry in the profile means zero recorded spend, not
//! missing data; these predicates only error when the customer itself is
//! unrecognized.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use adtarget_core::{PredicateError, PredicateResult, RequestContext, TargetingPredicate};

/// Matches customers whose purchase count in a category falls within bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendFrequencyPredicate {
    category: String,
    min_purchases: u32,
    max_purchases: Option<u32>,
}

impl SpendFrequencyPredicate {
    /// At least `min_purchases` purchases in `category`.
    pub fn at_least(category: impl Into<String>, min_purchases: u32) -> Self {
        Self {
            category: category.into(),
            min_purchases,
            max_purchases: None,
        }
    }

    /// Between `min_purchases` and `max_purchases` purchases, inclusive.
    pub fn between(category: impl Into<String>, min_purchases: u32, max_purchases: u32) -> Self {
        Self {
            category: category.into(),
            min_purchases,
            max_purchases: Some(max_purchases),
        }
    }
}

#[async_trait]
impl TargetingPredicate for SpendFrequencyPredicate {
    async fn evaluate(&self, context: &RequestContext) -> PredicateResult<bool> {
        if !context.is_recognized() {
            return Err(PredicateError::UnrecognizedCustomer);
        }
        let purchases = context
            .category_spend(&self.category)
            .map_or(0, |spend| spend.number_of_purchases);
        let above_min = purchases >= self.min_purchases;
        let below_max = self.max_purchases.is_none_or(|max| purchases <= max);
        Ok(above_min && below_max)
    }
}

/// Matches customers whose total spend in a category meets a minimum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendValuePredicate {
    category: String,
    min_spend_cents: i64,
}

impl SpendValuePredicate {
    pub fn new(category: impl Into<String>, min_spend_cents: i64) -> Self {
        Self {
            category: category.into(),
            min_spend_cents,
        }
    }
}

#[async_trait]
impl TargetingPredicate for SpendValuePredicate {
    async fn evaluate(&self, context: &RequestContext) -> PredicateResult<bool> {
        if !context.is_recognized() {
            return Err(PredicateError::UnrecognizedCustomer);
        }
        let total = context
            .category_spend(&self.category)
            .map_or(0, |spend| spend.total_spend_cents);
        Ok(total >= self.min_spend_cents)
    }
}

/// Matches customers who bought from a category within a recency window.
///
/// A customer with no recorded purchase in the category is a non-match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecencyPredicate {
    category: String,
    within_days: i64,
}

impl PurchaseRecencyPredicate {
    pub fn new(category: impl Into<String>, within_days: i64) -> Self {
        Self {
            category: category.into(),
            within_days,
        }
    }
}

#[async_trait]
impl TargetingPredicate for PurchaseRecencyPredicate {
    async fn evaluate(&self, context: &RequestContext) -> PredicateResult<bool> {
        if !context.is_recognized() {
            return Err(PredicateError::UnrecognizedCustomer);
        }
        let last_purchase = context
            .category_spend(&self.category)
            .and_then(|spend| spend.last_purchase);
        match last_purchase {
            Some(at) => Ok(Utc::now() - at <= Duration::days(self.within_days)),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adtarget_core::{CategorySpend, CustomerProfile};
    use std::collections::HashMap;

    fn context_with_spend(category: &str, spend: CategorySpend) -> RequestContext {
        let mut category_spend = HashMap::new();
        category_spend.insert(category.to_string(), spend);
        RequestContext::new(Some("c1".to_string()), "US").with_profile(CustomerProfile {
            category_spend,
            ..CustomerProfile::default()
        })
    }

    #[tokio::test]
    async fn test_frequency_at_least() {
        let ctx = context_with_spend(
            "books",
            CategorySpend {
                number_of_purchases: 5,
                total_spend_cents: 10_000,
                last_purchase: None,
            },
        );

        assert!(SpendFrequencyPredicate::at_least("books", 3)
            .evaluate(&ctx)
            .await
            .unwrap());
        assert!(!SpendFrequencyPredicate::at_least("books", 6)
            .evaluate(&ctx)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_frequency_between_is_inclusive() {
        let ctx = context_with_spend(
            "books",
            CategorySpend {
                number_of_purchases: 5,
                total_spend_cents: 0,
                last_purchase: None,
            },
        );

        assert!(SpendFrequencyPredicate::between("books", 5, 5)
            .evaluate(&ctx)
            .await
            .unwrap());
        assert!(!SpendFrequencyPredicate::between("books", 1, 4)
            .evaluate(&ctx)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_unknown_category_counts_as_zero_spend() {
        let ctx = RequestContext::new(Some("c1".to_string()), "US");

        assert!(!SpendFrequencyPredicate::at_least("garden", 1)
            .evaluate(&ctx)
            .await
            .unwrap());
        // Zero purchases satisfies a zero minimum.
        assert!(SpendFrequencyPredicate::at_least("garden", 0)
            .evaluate(&ctx)
            .await
            .unwrap());
        assert!(!SpendValuePredicate::new("garden", 1)
            .evaluate(&ctx)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_spend_value_minimum() {
        let ctx = context_with_spend(
            "electronics",
            CategorySpend {
                number_of_purchases: 2,
                total_spend_cents: 49_900,
                last_purchase: None,
            },
        );

        assert!(SpendValuePredicate::new("electronics", 40_000)
            .evaluate(&ctx)
            .await
            .unwrap());
        assert!(!SpendValuePredicate::new("electronics", 50_000)
            .evaluate(&ctx)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_recency_window() {
        let ctx = context_with_spend(
            "books",
            CategorySpend {
                number_of_purchases: 1,
                total_spend_cents: 1_500,
                last_purchase: Some(Utc::now() - Duration::days(3)),
            },
        );

        assert!(PurchaseRecencyPredicate::new("books", 7)
            .evaluate(&ctx)
            .await
            .unwrap());
        assert!(!PurchaseRecencyPredicate::new("books", 2)
            .evaluate(&ctx)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_recency_without_purchase_is_a_non_match() {
        let ctx = RequestContext::new(Some("c1".to_string()), "US");
        assert!(!PurchaseRecencyPredicate::new("books", 30)
            .evaluate(&ctx)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_spend_predicates_require_recognized_customer() {
        let anonymous = RequestContext::new(None, "US");
        assert!(SpendFrequencyPredicate::at_least("books", 1)
            .evaluate(&anonymous)
            .await
            .is_err());
        assert!(SpendValuePredicate::new("books", 1)
            .evaluate(&anonymous)
            .await
            .is_err());
        assert!(PurchaseRecencyPredicate::new("books", 7)
            .evaluate(&anonymous)
            .await
            .is_err());
    }
}
