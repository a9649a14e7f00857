//! Customer-targeting predicates.
//!
//! Concrete implementations of [`adtarget_core::TargetingPredicate`], each a
//! small side-effect-free test over the pre-fetched request context. Compose
//! them into a [`adtarget_core::TargetingGroup`] to gate ad content; negate
//! any of them with [`Inverse`].

pub mod demographic;
pub mod inverse;
pub mod spend;

// Re-export key types
pub use demographic::{AgePredicate, ParentPredicate, PrimeBenefitPredicate, RecognizedPredicate};
pub use inverse::Inverse;
pub use spend::{PurchaseRecencyPredicate, SpendFrequencyPredicate, SpendValuePredicate};
