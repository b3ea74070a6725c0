//! Symptom extractor: compile, scan, resolve.
//!
//! 1. Compile (startup): one word-bounded exact pattern per normalized
//!    variant, sorted most specific first (more tokens, then more characters).
//! 2. Scan (per request): every occurrence of every pattern in the
//!    normalized text, minus the ones inside a negation scope.
//! 3. Resolve: greedy most-specific-wins selection of non-overlapping
//!    matches; the surviving symptoms are returned in catalog order.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use regex::Regex;

use super::catalog::SymptomCatalog;
use super::negation::NegationScope;
use super::normalize::normalize;
use super::types::{CatalogError, ExtractionResult, LexicalVariant, Match};

/// A compiled variant pattern.
#[derive(Debug)]
struct VariantPattern {
    variant: LexicalVariant,
    regex: Regex,
}

/// Maps free text to canonical symptom ids.
///
/// Immutable after construction; safe to share across threads.
#[derive(Debug)]
pub struct SymptomExtractor {
    catalog: Arc<SymptomCatalog>,
    patterns: Vec<VariantPattern>,
    negation: NegationScope,
}

impl SymptomExtractor {
    pub fn new(catalog: Arc<SymptomCatalog>) -> Result<Self, CatalogError> {
        Self::with_negation(catalog, NegationScope::default())
    }

    pub fn with_negation(
        catalog: Arc<SymptomCatalog>,
        negation: NegationScope,
    ) -> Result<Self, CatalogError> {
        let mut patterns = Vec::new();

        for (symptom_index, symptom) in catalog.symptoms().iter().enumerate() {
            let mut seen = HashSet::new();
            for raw in &symptom.variants {
                let text = normalize(raw);
                if text.is_empty() || !seen.insert(text.clone()) {
                    continue;
                }
                let regex = Regex::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(&text)))
                    .map_err(|e| CatalogError::PatternCompile(e.to_string()))?;
                patterns.push(VariantPattern {
                    variant: LexicalVariant {
                        token_count: text.split(' ').count(),
                        char_length: text.len(),
                        text,
                        symptom_index,
                    },
                    regex,
                });
            }
        }

        // Stable: identical keys keep catalog declaration order.
        patterns.sort_by(|a, b| b.variant.specificity().cmp(&a.variant.specificity()));

        tracing::info!(
            patterns = patterns.len(),
            negation_window = negation.window_tokens(),
            "Symptom patterns compiled"
        );

        Ok(Self {
            catalog,
            patterns,
            negation,
        })
    }

    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    /// Number of compiled variant patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Canonical symptom ids present in `text`, in catalog order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.extract_detailed(text).symptoms
    }

    /// Every catalog symptom mapped to whether it was detected.
    pub fn extract_flags(&self, text: &str) -> BTreeMap<String, bool> {
        let detected: HashSet<String> = self.extract(text).into_iter().collect();
        self.catalog
            .symptoms()
            .iter()
            .map(|s| (s.name.clone(), detected.contains(&s.name)))
            .collect()
    }

    /// Accepted matches ordered by start offset.
    pub fn extract_matches(&self, text: &str) -> Vec<Match<'_>> {
        self.extract_detailed(text).matches
    }

    /// Full extraction: normalized text, accepted matches and symptom ids.
    pub fn extract_detailed(&self, text: &str) -> ExtractionResult<'_> {
        let normalized_text = normalize(text);
        if normalized_text.is_empty() {
            return ExtractionResult {
                normalized_text,
                matches: Vec::new(),
                symptoms: Vec::new(),
            };
        }

        let candidates = self.scan(&normalized_text);
        let matches = resolve_overlaps(candidates);
        let symptoms = self
            .catalog
            .order(matches.iter().map(|m| m.symptom));

        tracing::debug!(
            matches = matches.len(),
            symptoms = symptoms.len(),
            "Extraction complete"
        );

        ExtractionResult {
            normalized_text,
            matches,
            symptoms,
        }
    }

    /// All non-negated occurrences of every pattern, in pattern order.
    fn scan(&self, normalized: &str) -> Vec<Match<'_>> {
        let symptoms = self.catalog.symptoms();
        let mut candidates = Vec::new();

        for pattern in &self.patterns {
            for found in pattern.regex.find_iter(normalized) {
                if self.negation.is_negated(normalized, found.start()) {
                    continue;
                }
                candidates.push(Match {
                    variant: &pattern.variant,
                    symptom: symptoms[pattern.variant.symptom_index].name.as_str(),
                    start: found.start(),
                    end: found.end(),
                });
            }
        }

        candidates
    }
}

/// Most specific first; among equals the later start wins. A candidate is
/// kept only if it overlaps nothing already kept.
fn resolve_overlaps(mut candidates: Vec<Match<'_>>) -> Vec<Match<'_>> {
    candidates.sort_by(|a, b| {
        b.specificity()
            .cmp(&a.specificity())
            .then_with(|| b.start.cmp(&a.start))
    });

    let mut accepted: Vec<Match<'_>> = Vec::new();
    for candidate in candidates {
        if accepted.iter().any(|kept| kept.overlaps(&candidate)) {
            continue;
        }
        accepted.push(candidate);
    }

    accepted.sort_by_key(|m| m.start);
    accepted
}
