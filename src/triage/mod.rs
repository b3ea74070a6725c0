//! Symptom extraction and urgency decision.
//!
//! Free patient text → normalized text → canonical symptoms (catalog-driven
//! matcher with negation scoping and overlap resolution) → urgency level and
//! recommendation (priority table, combination rules, optional external
//! classifier level).
//!
//! All tables are built once at startup into a [`TriageEngine`] and shared
//! read-only; per-request work holds no shared mutable state.

pub mod catalog;
pub mod engine;
pub mod extractor;
pub mod negation;
pub mod normalize;
pub mod predictor;
pub mod types;
pub mod urgency;
pub mod vocabulary;

#[cfg(test)]
mod regression_tests;

pub use catalog::{CatalogBuilder, SymptomCatalog};
pub use engine::{CategoryGroups, EngineOptions, TriageEngine, TriageReport};
pub use extractor::SymptomExtractor;
pub use normalize::normalize;
pub use predictor::{FixedUrgencyPredictor, HttpUrgencyPredictor, PredictorError, UrgencyPredictor};
pub use types::{CatalogError, UrgencyDecision, UrgencyLevel, UrgencySource};
pub use urgency::UrgencyPolicy;
