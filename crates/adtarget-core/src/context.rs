//! Request context shared by every predicate in one evaluation call.
//!
//! A [`RequestContext`] is immutable once built. The evaluator hands a shared
//! reference to all concurrently executing predicates, so nothing in this
//! module exposes interior mutability. The profile data is pre-fetched by the
//! caller; the storage layer that populates it lives outside this crate.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Declared age range of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeRange {
    Under18,
    Age18To21,
    Age22To25,
    Age26To30,
    Age31To35,
    Age36To40,
    Age41To45,
    Age46To50,
    Over50,
}

/// Purchase history for a single product category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorySpend {
    /// Number of purchases the customer has made in the category.
    pub number_of_purchases: u32,

    /// Total spend in the category, in cents.
    pub total_spend_cents: i64,

    /// Timestamp of the most recent purchase, if any.
    pub last_purchase: Option<DateTime<Utc>>,
}

/// Pre-fetched customer attributes that predicates consult.
///
/// Absent fields mean the customer never declared the attribute; an absent
/// category entry in `category_spend` means zero recorded spend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerProfile {
    /// Declared age range, if the customer provided one.
    pub age_range: Option<AgeRange>,

    /// Whether the customer has declared themselves a parent.
    pub parent: Option<bool>,

    /// Prime benefit identifiers the customer is entitled to.
    pub prime_benefits: Vec<String>,

    /// Purchase history keyed by product category.
    pub category_spend: HashMap<String, CategorySpend>,
}

/// Read-only input data for one targeting evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Customer identifier; `None` for an unrecognized session.
    pub customer_id: Option<String>,

    /// Marketplace the request originated from.
    pub marketplace_id: String,

    /// Pre-fetched customer attributes.
    pub profile: CustomerProfile,
}

impl RequestContext {
    /// Create a context with an empty profile.
    pub fn new(customer_id: Option<String>, marketplace_id: impl Into<String>) -> Self {
        Self {
            customer_id,
            marketplace_id: marketplace_id.into(),
            profile: CustomerProfile::default(),
        }
    }

    /// Attach a customer profile.
    pub fn with_profile(mut self, profile: CustomerProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Whether the request identifies a known customer.
    pub fn is_recognized(&self) -> bool {
        self.customer_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }

    /// Purchase history for `category`, or `None` when no spend is recorded.
    pub fn category_spend(&self, category: &str) -> Option<&CategorySpend> {
        self.profile.category_spend.get(category)
    }
}
