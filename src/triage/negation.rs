//! Negation scope for symptom mentions.
//!
//! A mention is denied when one of the negation cues ("no", "sin",
//! "niega", "descarto", "ausencia de", ...) appears within a few tokens before
//! it. The look-behind is a bounded window of normalized tokens. Contrastive
//! connectors ("pero", "aunque", "sin embargo", ...) reset the scope, and
//! "no solo" style phrases cancel it.

/// Default number of normalized tokens inspected before a mention.
pub const DEFAULT_WINDOW_TOKENS: usize = 12;

/// Maximum number of tokens allowed between a cue and the mention.
const MAX_GAP_TOKENS: usize = 3;

/// Connectors after which earlier negations no longer apply.
const CONTRASTIVE_CONNECTORS: &[&[&str]] = &[
    &["pero"],
    &["aunque"],
    &["sin", "embargo"],
    &["excepto"],
    &["salvo"],
];

/// "no solo X" is additive, not a denial.
const NEGATION_EXCEPTIONS: &[&[&str]] = &[
    &["no", "solo"],
    &["no", "solamente"],
    &["no", "unicamente"],
];

const NEGATION_CUES: &[&[&str]] = &[
    &["no"],
    &["sin"],
    &["niega"],
    &["niego"],
    &["descarta"],
    &["descarto"],
    &["ausencia", "de"],
    &["libre", "de"],
];

/// Decides whether a mention at a given offset is negated.
#[derive(Debug, Clone, Copy)]
pub struct NegationScope {
    window_tokens: usize,
}

impl Default for NegationScope {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_TOKENS)
    }
}

impl NegationScope {
    pub fn new(window_tokens: usize) -> Self {
        Self { window_tokens }
    }

    pub fn window_tokens(&self) -> usize {
        self.window_tokens
    }

    /// `normalized` must be output of [`super::normalize::normalize`] and
    /// `start` a token boundary inside it.
    pub fn is_negated(&self, normalized: &str, start: usize) -> bool {
        let preceding = normalized.get(..start).unwrap_or("");
        let tokens: Vec<&str> = preceding.split_whitespace().collect();
        let from = tokens.len().saturating_sub(self.window_tokens);
        is_negated_window(&tokens[from..])
    }
}

fn is_negated_window(window: &[&str]) -> bool {
    if window.is_empty() {
        return false;
    }

    let window = match last_end_of_any(window, CONTRASTIVE_CONNECTORS) {
        Some(end) => &window[end..],
        None => window,
    };
    if window.is_empty() {
        return false;
    }

    if NEGATION_EXCEPTIONS
        .iter()
        .any(|phrase| find_all_ends(window, phrase).next().is_some())
    {
        return false;
    }

    let cue_in_reach = NEGATION_CUES.iter().any(|cue| {
        find_all_ends(window, cue).any(|end| window.len() - end <= MAX_GAP_TOKENS)
    });
    if cue_in_reach {
        return true;
    }

    // "no tengo fiebre alta ni tos": the trailing "ni" carries the earlier denial.
    window.last() == Some(&"ni") && window.iter().any(|t| *t == "no" || *t == "sin")
}

/// End indexes (exclusive) of every occurrence of `phrase` in `window`.
fn find_all_ends<'w>(
    window: &'w [&'w str],
    phrase: &'w [&'w str],
) -> impl Iterator<Item = usize> + 'w {
    window
        .windows(phrase.len())
        .enumerate()
        .filter(move |(_, candidate)| *candidate == phrase)
        .map(move |(i, _)| i + phrase.len())
}

fn last_end_of_any(window: &[&str], phrases: &[&[&str]]) -> Option<usize> {
    phrases
        .iter()
        .filter_map(|phrase| find_all_ends(window, phrase).last())
        .max()
}
