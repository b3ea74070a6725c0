//! Urgency rule engine.
//!
//! Rule-based level = highest priority among detected symptoms, raised by any
//! combination rule whose symptom set is fully present. An external predicted
//! level is blended (max) only when enough distinct symptoms were detected.
//! The engine never calls a classifier; it consumes a level or nothing.

use std::collections::HashSet;

use super::catalog::SymptomCatalog;
use super::types::{CatalogError, CombinationRule, UrgencyDecision, UrgencyLevel, UrgencySource};
use super::vocabulary;

/// Distinct symptoms required before an external level is considered.
pub const DEFAULT_ML_MIN_SYMPTOMS: usize = 2;

/// Combination rules plus the blending threshold. Read-only after startup.
#[derive(Debug, Clone)]
pub struct UrgencyPolicy {
    rules: Vec<CombinationRule>,
    ml_min_symptoms: usize,
}

impl UrgencyPolicy {
    /// Validate raw `(symptoms, level)` rules against the catalog.
    pub fn new(
        catalog: &SymptomCatalog,
        rules: &[(&[&str], u8)],
        ml_min_symptoms: usize,
    ) -> Result<Self, CatalogError> {
        let mut compiled = Vec::with_capacity(rules.len());
        for (symptoms, level) in rules {
            if symptoms.is_empty() {
                return Err(CatalogError::EmptyRule);
            }
            let level = UrgencyLevel::from_u8(*level)
                .filter(|l| *l != UrgencyLevel::None)
                .ok_or(CatalogError::InvalidRuleLevel { level: *level })?;
            for symptom in symptoms.iter() {
                if !catalog.contains(symptom) {
                    return Err(CatalogError::UnknownSymptom {
                        table: "combination rule",
                        symptom: symptom.to_string(),
                    });
                }
            }
            compiled.push(CombinationRule {
                symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
                level,
            });
        }

        Ok(Self {
            rules: compiled,
            ml_min_symptoms,
        })
    }

    /// The bundled combination rules.
    pub fn builtin(catalog: &SymptomCatalog, ml_min_symptoms: usize) -> Result<Self, CatalogError> {
        Self::new(catalog, vocabulary::COMBINATION_RULES, ml_min_symptoms)
    }

    pub fn rules(&self) -> &[CombinationRule] {
        &self.rules
    }

    pub fn ml_min_symptoms(&self) -> usize {
        self.ml_min_symptoms
    }

    /// Whether an external level would be blended for `distinct` symptoms.
    pub fn allows_ml(&self, distinct: usize) -> bool {
        distinct > 0 && distinct >= self.ml_min_symptoms
    }

    /// Rule-based level for a detected set, before any external blending.
    pub fn rule_level(&self, catalog: &SymptomCatalog, detected: &HashSet<&str>) -> UrgencyLevel {
        if detected.is_empty() {
            return UrgencyLevel::None;
        }

        let mut level = detected
            .iter()
            .filter_map(|s| UrgencyLevel::from_u8(catalog.priority(s)))
            .max()
            .unwrap_or(UrgencyLevel::Low);

        for rule in &self.rules {
            if rule.symptoms.iter().all(|s| detected.contains(s.as_str())) {
                level = level.max(rule.level);
            }
        }

        level
    }

    /// Decide the final urgency for a detected symptom list and an optional
    /// external level.
    pub fn decide<S: AsRef<str>>(
        &self,
        catalog: &SymptomCatalog,
        detected: &[S],
        ml_level: Option<UrgencyLevel>,
    ) -> UrgencyDecision {
        let distinct: HashSet<&str> = detected.iter().map(AsRef::as_ref).collect();

        if distinct.is_empty() {
            return UrgencyDecision {
                rule_based: UrgencyLevel::None,
                ml: None,
                final_level: UrgencyLevel::None,
                source: UrgencySource::None,
                recommendation: UrgencyLevel::None.recommendation(),
            };
        }

        let rule_based = self.rule_level(catalog, &distinct);

        let ml = ml_level
            .filter(|l| *l != UrgencyLevel::None)
            .filter(|_| self.allows_ml(distinct.len()));

        let (final_level, source) = match ml {
            Some(ml) if ml == rule_based => (rule_based, UrgencySource::Agreed),
            Some(ml) => (rule_based.max(ml), UrgencySource::Blended),
            None => (rule_based, UrgencySource::Rules),
        };

        UrgencyDecision {
            rule_based,
            ml,
            final_level,
            source,
            recommendation: final_level.recommendation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> (SymptomCatalog, UrgencyPolicy) {
        let catalog = SymptomCatalog::builtin().unwrap();
        let policy = UrgencyPolicy::builtin(&catalog, DEFAULT_ML_MIN_SYMPTOMS).unwrap();
        (catalog, policy)
    }

    #[test]
    fn nothing_detected_is_level_zero() {
        let (catalog, policy) = policy();
        let decision = policy.decide::<&str>(&catalog, &[], Some(UrgencyLevel::High));
        assert_eq!(decision.rule_based, UrgencyLevel::None);
        assert_eq!(decision.final_level, UrgencyLevel::None);
        assert_eq!(decision.source, UrgencySource::None);
        assert_eq!(decision.ml, None);
        assert_eq!(decision.recommendation, "No se detectaron sintomas, intente de nuevo.");
    }

    #[test]
    fn default_priority_symptom_is_level_one() {
        let (catalog, policy) = policy();
        let decision = policy.decide(&catalog, &["fiebre"], None);
        assert_eq!(decision.rule_based, UrgencyLevel::Low);
        assert_eq!(decision.final_level, UrgencyLevel::Low);
        assert_eq!(decision.source, UrgencySource::Rules);
        assert_eq!(decision.recommendation, "Reposo y observacion.");
    }

    #[test]
    fn max_priority_wins() {
        let (catalog, policy) = policy();
        let decision = policy.decide(&catalog, &["fiebre", "tos"], None);
        assert_eq!(decision.rule_based, UrgencyLevel::Medium);
        assert_eq!(
            decision.recommendation,
            "Buscar atencion medica en las proximas horas."
        );
        let decision = policy.decide(&catalog, &["fiebre", "dolor de pecho"], None);
        assert_eq!(decision.rule_based, UrgencyLevel::High);
    }

    #[test]
    fn combination_escalates() {
        let (catalog, policy) = policy();
        let decision = policy.decide(&catalog, &["fiebre", "mareos"], None);
        assert_eq!(decision.rule_based, UrgencyLevel::High);
        assert_eq!(decision.recommendation, "Acudir a emergencias inmediatamente.");
    }

    #[test]
    fn partial_combination_does_not_escalate() {
        let (catalog, policy) = policy();
        let decision = policy.decide(&catalog, &["ardor al orinar", "fatiga"], None);
        assert_eq!(decision.rule_based, UrgencyLevel::Medium);
    }

    #[test]
    fn combinations_never_lower_the_level() {
        let catalog = SymptomCatalog::builtin().unwrap();
        let policy = UrgencyPolicy::new(&catalog, &[(&["dolor de pecho", "fiebre"], 1)], 2).unwrap();
        let decision = policy.decide(&catalog, &["dolor de pecho", "fiebre"], None);
        assert_eq!(decision.rule_based, UrgencyLevel::High);
    }

    #[test]
    fn ml_ignored_below_threshold() {
        let (catalog, policy) = policy();
        let decision = policy.decide(&catalog, &["fiebre"], Some(UrgencyLevel::High));
        assert_eq!(decision.final_level, UrgencyLevel::Low);
        assert_eq!(decision.source, UrgencySource::Rules);
        assert!(!decision.ml_used());
    }

    #[test]
    fn duplicates_do_not_count_toward_threshold() {
        let (catalog, policy) = policy();
        let decision = policy.decide(&catalog, &["fiebre", "fiebre"], Some(UrgencyLevel::High));
        assert_eq!(decision.final_level, UrgencyLevel::Low);
        assert_eq!(decision.source, UrgencySource::Rules);
    }

    #[test]
    fn ml_above_rules_is_blended() {
        let (catalog, policy) = policy();
        let decision = policy.decide(&catalog, &["fiebre", "tos"], Some(UrgencyLevel::High));
        assert_eq!(decision.rule_based, UrgencyLevel::Medium);
        assert_eq!(decision.ml, Some(UrgencyLevel::High));
        assert_eq!(decision.final_level, UrgencyLevel::High);
        assert_eq!(decision.source, UrgencySource::Blended);
    }

    #[test]
    fn ml_below_rules_keeps_rule_level() {
        let (catalog, policy) = policy();
        let decision = policy.decide(&catalog, &["fiebre", "mareos"], Some(UrgencyLevel::Low));
        assert_eq!(decision.final_level, UrgencyLevel::High);
        assert_eq!(decision.source, UrgencySource::Blended);
    }

    #[test]
    fn ml_equal_to_rules_is_agreement() {
        let (catalog, policy) = policy();
        let decision = policy.decide(&catalog, &["fiebre", "tos"], Some(UrgencyLevel::Medium));
        assert_eq!(decision.final_level, UrgencyLevel::Medium);
        assert_eq!(decision.source, UrgencySource::Agreed);
    }

    #[test]
    fn absent_ml_with_enough_symptoms_is_rules() {
        let (catalog, policy) = policy();
        let decision = policy.decide(&catalog, &["fiebre", "tos"], None);
        assert_eq!(decision.source, UrgencySource::Rules);
    }

    #[test]
    fn custom_threshold() {
        let catalog = SymptomCatalog::builtin().unwrap();
        let policy = UrgencyPolicy::builtin(&catalog, 1).unwrap();
        let decision = policy.decide(&catalog, &["fiebre"], Some(UrgencyLevel::High));
        assert_eq!(decision.final_level, UrgencyLevel::High);
        assert_eq!(decision.source, UrgencySource::Blended);
    }

    #[test]
    fn unknown_symptom_uses_default_priority() {
        let (catalog, policy) = policy();
        let decision = policy.decide(&catalog, &["algo raro"], None);
        assert_eq!(decision.rule_based, UrgencyLevel::Low);
    }

    #[test]
    fn invalid_rules_are_rejected() {
        let catalog = SymptomCatalog::builtin().unwrap();
        assert_eq!(
            UrgencyPolicy::new(&catalog, &[(&["fiebre"], 4)], 2).unwrap_err(),
            CatalogError::InvalidRuleLevel { level: 4 }
        );
        assert_eq!(
            UrgencyPolicy::new(&catalog, &[(&["fiebre"], 0)], 2).unwrap_err(),
            CatalogError::InvalidRuleLevel { level: 0 }
        );
        assert_eq!(
            UrgencyPolicy::new(&catalog, &[(&[], 3)], 2).unwrap_err(),
            CatalogError::EmptyRule
        );
        assert!(matches!(
            UrgencyPolicy::new(&catalog, &[(&["fiebre", "no existe"], 3)], 2).unwrap_err(),
            CatalogError::UnknownSymptom { .. }
        ));
    }

    #[test]
    fn builtin_rules_load() {
        let (_, policy) = policy();
        assert_eq!(policy.rules().len(), 10);
        assert!(policy.rules().iter().all(|r| r.level == UrgencyLevel::High));
    }
}
