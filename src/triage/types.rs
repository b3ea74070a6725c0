use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

// ═══════════════════════════════════════════════════════════
// Catalog types
// ═══════════════════════════════════════════════════════════

/// A recognized clinical symptom and every phrasing that refers to it.
///
/// Built once by the catalog builder and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct CanonicalSymptom {
    /// Stable identifier (the canonical Spanish name, accents included).
    pub name: String,
    /// Priority in 1..=3.
    pub priority: u8,
    /// Clinical category label.
    pub category: String,
    /// De-duplicated phrasings in insertion order. Accented and folded
    /// spellings are both retained.
    pub variants: Vec<String>,
}

/// One normalized phrasing compiled for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalVariant {
    /// Normalized text of the phrasing.
    pub text: String,
    pub token_count: usize,
    pub char_length: usize,
    /// Index of the owning symptom in catalog declaration order.
    pub symptom_index: usize,
}

impl LexicalVariant {
    /// Ordering key used to prefer longer, multi-word phrasings.
    pub fn specificity(&self) -> (usize, usize) {
        (self.token_count, self.char_length)
    }
}

/// Escalates the rule-based level when every listed symptom is detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationRule {
    pub symptoms: Vec<String>,
    pub level: UrgencyLevel,
}

// ═══════════════════════════════════════════════════════════
// Per-request types
// ═══════════════════════════════════════════════════════════

/// A located, non-negated occurrence of a variant in normalized text.
///
/// Spans are half-open byte ranges; normalized text is ASCII so bytes and
/// characters coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    pub variant: &'a LexicalVariant,
    pub symptom: &'a str,
    pub start: usize,
    pub end: usize,
}

impl Match<'_> {
    pub fn specificity(&self) -> (usize, usize) {
        self.variant.specificity()
    }

    pub fn overlaps(&self, other: &Match<'_>) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }
}

/// Everything one extraction produced.
#[derive(Debug, Clone)]
pub struct ExtractionResult<'a> {
    /// The input after normalization.
    pub normalized_text: String,
    /// Accepted matches, pairwise non-overlapping, ordered by start offset.
    pub matches: Vec<Match<'a>>,
    /// Distinct canonical ids in catalog declaration order.
    pub symptoms: Vec<String>,
}

impl ExtractionResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════
// Urgency
// ═══════════════════════════════════════════════════════════

/// Urgency level, 0 (nothing detected) through 3 (emergency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum UrgencyLevel {
    #[default]
    None = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl UrgencyLevel {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    /// Accept an externally predicted level. Only 1..=3 is a usable signal.
    pub fn from_prediction(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    /// Recommended action shown to the patient for this level.
    pub fn recommendation(self) -> &'static str {
        match self {
            Self::High => "Acudir a emergencias inmediatamente.",
            Self::Medium => "Buscar atencion medica en las proximas horas.",
            Self::Low => "Reposo y observacion.",
            Self::None => NO_SYMPTOMS_MESSAGE,
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl Serialize for UrgencyLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// Message returned when no symptom could be recognized.
pub const NO_SYMPTOMS_MESSAGE: &str = "No se detectaron sintomas, intente de nuevo.";

/// Where the final urgency level came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrgencySource {
    /// Nothing detected.
    #[serde(rename = "none")]
    None,
    /// Rules only (no blend, or no usable external signal).
    #[serde(rename = "reglas")]
    Rules,
    /// Blended with the external signal and the two levels differ.
    #[serde(rename = "ml+reglas")]
    Blended,
    /// Blended with the external signal and the two levels coincide.
    #[serde(rename = "reglas=ml")]
    Agreed,
}

impl UrgencySource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Rules => "reglas",
            Self::Blended => "ml+reglas",
            Self::Agreed => "reglas=ml",
        }
    }
}

impl fmt::Display for UrgencySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the urgency rule engine for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrgencyDecision {
    pub rule_based: UrgencyLevel,
    /// External level, present only when it was blended.
    pub ml: Option<UrgencyLevel>,
    pub final_level: UrgencyLevel,
    pub source: UrgencySource,
    pub recommendation: &'static str,
}

impl UrgencyDecision {
    pub fn ml_used(&self) -> bool {
        self.ml.is_some()
    }
}

// ═══════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════

/// Startup-time failures while building the catalog or its tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog has no symptoms")]
    EmptyCatalog,

    #[error("Symptom '{symptom}' has no usable variants")]
    EmptyVariants { symptom: String },

    #[error("Symptom '{symptom}' declared more than once")]
    DuplicateSymptom { symptom: String },

    #[error("{table} references unknown symptom '{symptom}'")]
    UnknownSymptom { table: &'static str, symptom: String },

    #[error("Symptom '{symptom}' has invalid priority {priority} (expected 1-3)")]
    InvalidPriority { symptom: String, priority: u8 },

    #[error("Combination rule has invalid level {level} (expected 1-3)")]
    InvalidRuleLevel { level: u8 },

    #[error("Combination rule lists no symptoms")]
    EmptyRule,

    #[error("Pattern compilation failed: {0}")]
    PatternCompile(String),
}
