use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use super::catalog::SymptomCatalog;
use super::extractor::SymptomExtractor;
use super::negation::{NegationScope, DEFAULT_WINDOW_TOKENS};
use super::normalize::normalize;
use super::predictor::UrgencyPredictor;
use super::types::{CatalogError, UrgencyDecision, UrgencyLevel, UrgencySource};
use super::urgency::{UrgencyPolicy, DEFAULT_ML_MIN_SYMPTOMS};

/// Tunables for a [`TriageEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Distinct symptoms required before an external level is blended.
    pub ml_min_symptoms: usize,
    /// Normalized tokens inspected before a mention for negation.
    pub negation_window_tokens: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            ml_min_symptoms: DEFAULT_ML_MIN_SYMPTOMS,
            negation_window_tokens: DEFAULT_WINDOW_TOKENS,
        }
    }
}

/// Detected symptoms grouped by category. Categories keep the order in which
/// their first symptom was detected; serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGroups(Vec<(String, Vec<String>)>);

impl CategoryGroups {
    fn push(&mut self, category: &str, symptom: String) {
        match self.0.iter_mut().find(|(name, _)| name == category) {
            Some((_, symptoms)) => symptoms.push(symptom),
            None => self.0.push((category.to_string(), vec![symptom])),
        }
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, symptoms)| symptoms.as_slice())
    }

    /// Category names in detection order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for CategoryGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, symptoms)| (name, symptoms)))
    }
}

/// Result of analysing one patient description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageReport {
    #[serde(rename = "sintomas")]
    pub symptoms: Vec<String>,
    #[serde(rename = "categorias")]
    pub categories: CategoryGroups,
    #[serde(rename = "prioridades")]
    pub priorities: BTreeMap<String, u8>,
    pub overall_urgency: UrgencyLevel,
    pub rule_based_urgency: UrgencyLevel,
    pub recommended_action: String,
    pub ml_enabled: bool,
    pub ml_predicted_urgency: Option<UrgencyLevel>,
    pub ml_used: bool,
    pub urgency_source: UrgencySource,
}

impl TriageReport {
    fn without_symptoms(ml_enabled: bool) -> Self {
        Self {
            symptoms: Vec::new(),
            categories: CategoryGroups::default(),
            priorities: BTreeMap::new(),
            overall_urgency: UrgencyLevel::None,
            rule_based_urgency: UrgencyLevel::None,
            recommended_action: UrgencyLevel::None.recommendation().to_string(),
            ml_enabled,
            ml_predicted_urgency: None,
            ml_used: false,
            urgency_source: UrgencySource::None,
        }
    }
}

/// Catalog, compiled extractor and urgency policy, built once and shared.
///
/// Every method takes `&self` and allocates only per-call data, so one
/// instance behind an `Arc` serves any number of concurrent requests.
#[derive(Debug)]
pub struct TriageEngine {
    catalog: Arc<SymptomCatalog>,
    extractor: SymptomExtractor,
    policy: UrgencyPolicy,
}

impl TriageEngine {
    /// Build from the bundled vocabulary.
    pub fn builtin(options: EngineOptions) -> Result<Self, CatalogError> {
        let catalog = Arc::new(SymptomCatalog::builtin()?);
        let policy = UrgencyPolicy::builtin(&catalog, options.ml_min_symptoms)?;
        Self::from_parts(catalog, policy, options)
    }

    pub fn from_parts(
        catalog: Arc<SymptomCatalog>,
        policy: UrgencyPolicy,
        options: EngineOptions,
    ) -> Result<Self, CatalogError> {
        let extractor = SymptomExtractor::with_negation(
            Arc::clone(&catalog),
            NegationScope::new(options.negation_window_tokens),
        )?;
        Ok(Self {
            catalog,
            extractor,
            policy,
        })
    }

    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    pub fn extractor(&self) -> &SymptomExtractor {
        &self.extractor
    }

    pub fn policy(&self) -> &UrgencyPolicy {
        &self.policy
    }

    /// Detected canonical ids in catalog order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.extractor.extract(text)
    }

    /// Urgency for an already-extracted symptom list.
    pub fn decide<S: AsRef<str>>(
        &self,
        symptoms: &[S],
        ml_level: Option<UrgencyLevel>,
    ) -> UrgencyDecision {
        self.policy.decide(&self.catalog, symptoms, ml_level)
    }

    /// Symptom → category for the given ids.
    pub fn symptom_categories<S: AsRef<str>>(&self, symptoms: &[S]) -> BTreeMap<String, String> {
        symptoms
            .iter()
            .map(|s| {
                let s = s.as_ref();
                (s.to_string(), self.catalog.category(s).to_string())
            })
            .collect()
    }

    /// Symptom → priority for the given ids.
    pub fn symptom_priorities<S: AsRef<str>>(&self, symptoms: &[S]) -> BTreeMap<String, u8> {
        symptoms
            .iter()
            .map(|s| {
                let s = s.as_ref();
                (s.to_string(), self.catalog.priority(s))
            })
            .collect()
    }

    /// Rules-only analysis.
    pub fn analyze(&self, text: &str) -> TriageReport {
        self.analyze_with(text, None)
    }

    /// Full analysis. The predictor is consulted only when enough distinct
    /// symptoms were found; its failures are logged and ignored.
    pub fn analyze_with(
        &self,
        text: &str,
        predictor: Option<&dyn UrgencyPredictor>,
    ) -> TriageReport {
        let ml_enabled = predictor.is_some();

        let normalized = normalize(text);
        if normalized.is_empty() {
            return TriageReport::without_symptoms(ml_enabled);
        }

        let symptoms = self.extractor.extract(&normalized);
        if symptoms.is_empty() {
            tracing::debug!("No symptoms detected");
            return TriageReport::without_symptoms(ml_enabled);
        }

        let ml_level = match predictor {
            Some(p) if self.policy.allows_ml(symptoms.len()) => {
                predicted_level(p, &normalized)
            }
            _ => None,
        };

        let decision = self.decide(&symptoms, ml_level);

        let mut categories = CategoryGroups::default();
        for s in &symptoms {
            categories.push(self.catalog.category(s), s.clone());
        }

        tracing::debug!(
            symptoms = ?symptoms,
            rule_based = %decision.rule_based,
            final_level = %decision.final_level,
            source = %decision.source,
            "Triage decision"
        );

        TriageReport {
            priorities: self.symptom_priorities(&symptoms),
            categories,
            overall_urgency: decision.final_level,
            rule_based_urgency: decision.rule_based,
            recommended_action: decision.recommendation.to_string(),
            ml_enabled,
            ml_predicted_urgency: decision.ml,
            ml_used: decision.ml_used(),
            urgency_source: decision.source,
            symptoms,
        }
    }
}

fn predicted_level(predictor: &dyn UrgencyPredictor, normalized: &str) -> Option<UrgencyLevel> {
    match predictor.predict(normalized) {
        Ok(raw) => {
            let level = UrgencyLevel::from_prediction(raw);
            if level.is_none() {
                tracing::warn!(
                    predictor = %predictor.describe(),
                    raw,
                    "Classifier level out of range, using rules only"
                );
            }
            level
        }
        Err(e) => {
            tracing::warn!(
                predictor = %predictor.describe(),
                error = %e,
                "Classifier unavailable, using rules only"
            );
            None
        }
    }
}
