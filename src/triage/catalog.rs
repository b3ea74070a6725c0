//! Catalog builder.
//!
//! Expands canonical symptom names and their example phrasings into a
//! de-duplicated variant list per symptom, synthesizing the common Spanish
//! paraphrases of pain expressions ("dolor de X", "me duele X", "X adolorido")
//! so that colloquial word order does not have to be enumerated by hand.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::normalize::{collapse_lower, normalize, strip_accents};
use super::types::{CanonicalSymptom, CatalogError};
use super::vocabulary;

/// Immutable symptom catalog, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct SymptomCatalog {
    symptoms: Vec<CanonicalSymptom>,
    index: HashMap<String, usize>,
}

impl SymptomCatalog {
    /// Build the catalog from the bundled Spanish vocabulary.
    pub fn builtin() -> Result<Self, CatalogError> {
        CatalogBuilder::from_vocabulary().build()
    }

    pub fn symptoms(&self) -> &[CanonicalSymptom] {
        &self.symptoms
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CanonicalSymptom> {
        self.index.get(name).map(|&i| &self.symptoms[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Declaration position of a symptom.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Priority of a symptom, or the default for ids outside the catalog.
    pub fn priority(&self, name: &str) -> u8 {
        self.get(name)
            .map(|s| s.priority)
            .unwrap_or(vocabulary::DEFAULT_PRIORITY)
    }

    /// Category of a symptom, or the default for ids outside the catalog.
    pub fn category(&self, name: &str) -> &str {
        self.get(name)
            .map(|s| s.category.as_str())
            .unwrap_or(vocabulary::DEFAULT_CATEGORY)
    }

    /// De-duplicate ids and order them by declaration order; ids outside
    /// the catalog follow, sorted lexicographically.
    pub fn order<'a, I>(&self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut known: Vec<usize> = Vec::new();
        let mut unknown: Vec<&str> = Vec::new();
        for id in ids {
            match self.position(id) {
                Some(i) => known.push(i),
                None => unknown.push(id),
            }
        }
        known.sort_unstable();
        known.dedup();
        unknown.sort_unstable();
        unknown.dedup();

        known
            .into_iter()
            .map(|i| self.symptoms[i].name.clone())
            .chain(unknown.into_iter().map(str::to_string))
            .collect()
    }

    /// Normalized phrasings claimed by more than one symptom.
    ///
    /// Such collisions make attribution depend on declaration order; they are
    /// reported, not resolved.
    pub fn colliding_variants(&self) -> BTreeMap<String, Vec<String>> {
        let mut owners: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for symptom in &self.symptoms {
            let mut seen = HashSet::new();
            for variant in &symptom.variants {
                let norm = normalize(variant);
                if norm.is_empty() || !seen.insert(norm.clone()) {
                    continue;
                }
                owners.entry(norm).or_default().push(symptom.name.clone());
            }
        }
        owners.retain(|_, names| names.len() > 1);
        owners
    }
}

// ═══════════════════════════════════════════════════════════
// Builder
// ═══════════════════════════════════════════════════════════

/// Collects raw vocabulary and overrides, then validates and expands them.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    phrases: Vec<(String, Vec<String>)>,
    priorities: Vec<(String, u8)>,
    categories: Vec<(String, String)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-loaded with the bundled vocabulary and overrides.
    pub fn from_vocabulary() -> Self {
        let mut builder = Self::new();
        for (name, phrases) in vocabulary::SYMPTOM_PHRASES {
            builder = builder.symptom(name, phrases.iter().copied());
        }
        for (name, priority) in vocabulary::PRIORITY_OVERRIDES {
            builder = builder.priority(name, *priority);
        }
        for (name, category) in vocabulary::CATEGORY_OVERRIDES {
            builder = builder.category(name, category);
        }
        builder
    }

    /// Declare a canonical symptom with its example phrasings.
    pub fn symptom<I, S>(mut self, name: &str, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrases
            .push((name.to_string(), phrases.into_iter().map(Into::into).collect()));
        self
    }

    pub fn priority(mut self, name: &str, priority: u8) -> Self {
        self.priorities.push((name.to_string(), priority));
        self
    }

    pub fn category(mut self, name: &str, category: &str) -> Self {
        self.categories.push((name.to_string(), category.to_string()));
        self
    }

    pub fn build(self) -> Result<SymptomCatalog, CatalogError> {
        if self.phrases.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut symptoms = Vec::with_capacity(self.phrases.len());
        let mut index = HashMap::with_capacity(self.phrases.len());

        for (name, phrases) in &self.phrases {
            if index.contains_key(name) {
                return Err(CatalogError::DuplicateSymptom {
                    symptom: name.clone(),
                });
            }

            let variants = expand_variants(name, phrases);
            if !variants.iter().any(|v| !normalize(v).is_empty()) {
                return Err(CatalogError::EmptyVariants {
                    symptom: name.clone(),
                });
            }

            index.insert(name.clone(), symptoms.len());
            symptoms.push(CanonicalSymptom {
                name: name.clone(),
                priority: vocabulary::DEFAULT_PRIORITY,
                category: vocabulary::DEFAULT_CATEGORY.to_string(),
                variants,
            });
        }

        for (name, priority) in self.priorities {
            let i = *index.get(&name).ok_or_else(|| CatalogError::UnknownSymptom {
                table: "priority",
                symptom: name.clone(),
            })?;
            if !(1..=3).contains(&priority) {
                return Err(CatalogError::InvalidPriority {
                    symptom: name,
                    priority,
                });
            }
            symptoms[i].priority = priority;
        }

        for (name, category) in self.categories {
            let i = *index.get(&name).ok_or_else(|| CatalogError::UnknownSymptom {
                table: "category",
                symptom: name.clone(),
            })?;
            symptoms[i].category = category;
        }

        let catalog = SymptomCatalog { symptoms, index };

        let variant_count: usize = catalog.symptoms.iter().map(|s| s.variants.len()).sum();
        let collisions = catalog.colliding_variants();
        tracing::info!(
            symptoms = catalog.len(),
            variants = variant_count,
            "Symptom catalog built"
        );
        if !collisions.is_empty() {
            tracing::debug!(
                count = collisions.len(),
                "Variants shared by several symptoms; attribution follows declaration order"
            );
        }

        Ok(catalog)
    }
}

// ═══════════════════════════════════════════════════════════
// Expansion
// ═══════════════════════════════════════════════════════════

/// Canonical name first, then every phrasing followed by its paraphrases,
/// then the paraphrases of the canonical name itself.
pub(crate) fn expand_variants(name: &str, phrases: &[String]) -> Vec<String> {
    let mut variants = Vec::new();
    let mut seen = HashSet::new();

    add_variant(&mut variants, &mut seen, name);
    for phrase in phrases {
        add_variant(&mut variants, &mut seen, phrase);
        add_paraphrases(&mut variants, &mut seen, &collapse_lower(phrase));
    }
    add_paraphrases(&mut variants, &mut seen, &collapse_lower(name));

    variants
}

/// Add the lowercase form and its accent-free spelling, skipping repeats.
fn add_variant(variants: &mut Vec<String>, seen: &mut HashSet<String>, text: &str) {
    let base = collapse_lower(text);
    if base.is_empty() {
        return;
    }
    let folded = strip_accents(&base);
    for candidate in [base, folded] {
        if !candidate.is_empty() && seen.insert(candidate.clone()) {
            variants.push(candidate);
        }
    }
}

fn add_paraphrases(variants: &mut Vec<String>, seen: &mut HashSet<String>, term: &str) {
    let mut add = |text: String| add_variant(variants, seen, &text);

    if let Some(zone) = zone_after(term, "dolor de ") {
        add(format!("dolor en {zone}"));
        add(format!("me duele {zone}"));
        add(format!("duele {zone}"));
        add(format!("me esta doliendo {zone}"));
        add(format!("{zone} adolorido"));
        add(format!("{zone} adolorida"));
        add(format!("{zone} dolorido"));
        add(format!("{zone} dolorida"));
    }

    if let Some(zone) = zone_after(term, "dolor en ") {
        add(format!("dolor de {zone}"));
        add(format!("me duele {zone}"));
        add(format!("duele {zone}"));
        add(format!("me esta doliendo {zone}"));
    }

    if let Some(zone) = zone_after(term, "me duele ") {
        add(format!("duele {zone}"));
        add(format!("me esta doliendo {zone}"));
    }

    if let Some(zone) = zone_after(term, "duele ") {
        add(format!("me duele {zone}"));
        add(format!("me esta doliendo {zone}"));
    }

    for generic in ["estoy con ", "tengo "] {
        if let Some(rest) = zone_after(term, generic) {
            add(rest.to_string());
        }
    }
}

fn zone_after<'a>(term: &'a str, prefix: &str) -> Option<&'a str> {
    term.strip_prefix(prefix)
        .map(str::trim)
        .filter(|zone| !zone.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn canonical_name_comes_first() {
        let variants = expand_variants("fiebre", &phrases(&["calentura", "fiebre"]));
        assert_eq!(variants[0], "fiebre");
        assert_eq!(variants.iter().filter(|v| *v == "fiebre").count(), 1);
    }

    #[test]
    fn keeps_accented_and_folded_spellings() {
        let variants = expand_variants("vértigo", &phrases(&["Vértigo", "sensación de vértigo"]));
        assert!(variants.contains(&"vértigo".to_string()));
        assert!(variants.contains(&"vertigo".to_string()));
        assert!(variants.contains(&"sensación de vértigo".to_string()));
        assert!(variants.contains(&"sensacion de vertigo".to_string()));
        assert_eq!(variants.iter().filter(|v| *v == "vertigo").count(), 1);
    }

    #[test]
    fn dolor_de_synthesizes_paraphrases() {
        let variants = expand_variants("dolor de rodilla", &[]);
        for expected in [
            "dolor en rodilla",
            "me duele rodilla",
            "duele rodilla",
            "me esta doliendo rodilla",
            "rodilla adolorido",
            "rodilla adolorida",
            "rodilla dolorido",
            "rodilla dolorida",
        ] {
            assert!(variants.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn dolor_en_is_reciprocal() {
        let variants = expand_variants("molestia", &phrases(&["dolor en la cadera"]));
        assert!(variants.contains(&"dolor de la cadera".to_string()));
        assert!(variants.contains(&"me duele la cadera".to_string()));
        assert!(variants.contains(&"me esta doliendo la cadera".to_string()));
    }

    #[test]
    fn me_duele_and_duele_feed_each_other() {
        let from_me = expand_variants("x", &phrases(&["me duele la espalda"]));
        assert!(from_me.contains(&"duele la espalda".to_string()));
        let from_bare = expand_variants("x", &phrases(&["duele el brazo"]));
        assert!(from_bare.contains(&"me duele el brazo".to_string()));
    }

    #[test]
    fn generic_prefixes_add_bare_phrase() {
        let variants = expand_variants("gripe", &phrases(&["tengo gripa", "estoy con catarro"]));
        assert!(variants.contains(&"gripa".to_string()));
        assert!(variants.contains(&"catarro".to_string()));
    }

    #[test]
    fn accented_paraphrases_fold_too() {
        let variants = expand_variants("dolor de estómago", &[]);
        assert!(variants.contains(&"me duele estómago".to_string()));
        assert!(variants.contains(&"me duele estomago".to_string()));
    }

    #[test]
    fn builtin_catalog_every_symptom_has_extra_variants() {
        let catalog = SymptomCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), vocabulary::SYMPTOM_PHRASES.len());
        for symptom in catalog.symptoms() {
            let name = normalize(&symptom.name);
            assert!(
                symptom.variants.iter().any(|v| normalize(v) != name),
                "{} has no phrasing beyond its name: {:?}",
                symptom.name,
                symptom.variants
            );
            assert_eq!(symptom.variants[0], collapse_lower(&symptom.name));
        }
    }

    #[test]
    fn builtin_catalog_applies_overrides() {
        let catalog = SymptomCatalog::builtin().unwrap();
        assert_eq!(catalog.priority("dolor de pecho"), 3);
        assert_eq!(catalog.priority("mareos"), 2);
        assert_eq!(catalog.priority("fiebre"), 1);
        assert_eq!(catalog.category("fiebre"), "Infeccioso");
        assert_eq!(catalog.category("ardor"), "General");
        assert_eq!(catalog.priority("no existe"), 1);
        assert_eq!(catalog.category("no existe"), "General");
    }

    #[test]
    fn order_follows_declaration_then_lexicographic() {
        let catalog = SymptomCatalog::builtin().unwrap();
        let ordered = catalog.order(["zzz", "mareos", "fiebre", "aaa", "mareos"]);
        assert_eq!(ordered, vec!["fiebre", "mareos", "aaa", "zzz"]);
    }

    #[test]
    fn reports_shared_variants() {
        let catalog = SymptomCatalog::builtin().unwrap();
        let collisions = catalog.colliding_variants();
        let owners = collisions.get("hinchazon").expect("hinchazon is shared");
        assert!(owners.contains(&"inflamación".to_string()));
        assert!(owners.contains(&"hinchazón".to_string()));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(CatalogBuilder::new().build().unwrap_err(), CatalogError::EmptyCatalog);
    }

    #[test]
    fn unusable_variants_are_rejected() {
        let err = CatalogBuilder::new()
            .symptom("¿?", ["!!", "   "])
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::EmptyVariants { symptom: "¿?".into() });
    }

    #[test]
    fn duplicate_symptom_is_rejected() {
        let err = CatalogBuilder::new()
            .symptom("tos", ["tos"])
            .symptom("tos", ["tosiendo"])
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSymptom { .. }));
    }

    #[test]
    fn override_for_unknown_symptom_is_rejected() {
        let err = CatalogBuilder::new()
            .symptom("tos", ["tosiendo"])
            .priority("fiebre", 2)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownSymptom { table: "priority", symptom: "fiebre".into() }
        );

        let err = CatalogBuilder::new()
            .symptom("tos", ["tosiendo"])
            .category("fiebre", "Infeccioso")
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSymptom { table: "category", .. }));
    }

    #[test]
    fn priority_out_of_range_is_rejected() {
        let err = CatalogBuilder::new()
            .symptom("tos", ["tosiendo"])
            .priority("tos", 4)
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::InvalidPriority { symptom: "tos".into(), priority: 4 });
    }
}
