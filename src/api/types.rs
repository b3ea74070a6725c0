//! Shared types for the HTTP layer.

use std::sync::Arc;

use crate::triage::{TriageEngine, TriageReport, UrgencyPredictor};

// ═══════════════════════════════════════════════════════════
// API context (shared router state)
// ═══════════════════════════════════════════════════════════

/// Shared context for all routes. Cloning is two reference-count bumps.
#[derive(Clone)]
pub struct ApiContext {
    pub engine: Arc<TriageEngine>,
    pub predictor: Option<Arc<dyn UrgencyPredictor>>,
}

impl ApiContext {
    pub fn new(engine: Arc<TriageEngine>, predictor: Option<Arc<dyn UrgencyPredictor>>) -> Self {
        Self { engine, predictor }
    }

    pub fn ml_enabled(&self) -> bool {
        self.predictor.is_some()
    }

    /// Full analysis with the configured classifier, if any. May block.
    pub fn analyze(&self, text: &str) -> TriageReport {
        self.engine.analyze_with(text, self.predictor.as_deref())
    }
}
