//! Text normalization shared by the catalog builder and the extractor.
//!
//! Everything the matcher compares is in this canonical form: lowercase,
//! accent-folded ASCII letters and digits separated by single spaces.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize arbitrary text for matching.
///
/// Steps: lowercase, NFD-decompose and drop combining marks, replace every
/// character outside `[a-z0-9]` and whitespace with a space, collapse
/// whitespace runs, trim. Never fails; empty input yields `""`.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Same as [`normalize`] for optional input (absent text normalizes to `""`).
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// Lowercase, trim and collapse whitespace without folding accents.
///
/// Used by the catalog builder so that the accented spelling of a phrase is
/// retained alongside its folded form.
pub(crate) fn collapse_lower(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove combining marks (accents) while keeping everything else intact.
pub(crate) fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_folds_accents() {
        assert_eq!(normalize("Dolor de Estómago"), "dolor de estomago");
        assert_eq!(normalize("NÁUSEAS y vómitos"), "nauseas y vomitos");
        assert_eq!(normalize("uñas quebradizas"), "unas quebradizas");
    }

    #[test]
    fn punctuation_becomes_space() {
        assert_eq!(normalize("Tengo fiebre."), "tengo fiebre");
        assert_eq!(normalize("¿fiebre?¡tos!"), "fiebre tos");
        assert_eq!(normalize("dolor-de-cabeza"), "dolor de cabeza");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize("  tengo \t\n  tos   seca  "), "tengo tos seca");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(normalize("Fiebre de 39°C"), "fiebre de 39 c");
    }

    #[test]
    fn degenerate_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("¡¿...!?"), "");
        assert_eq!(normalize("日本語"), "");
        assert_eq!(normalize_opt(None), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("Me duele MUCHO la cabeza, ¡auxilio!");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn collapse_lower_keeps_accents() {
        assert_eq!(collapse_lower("  Dolor  de ESTÓMAGO "), "dolor de estómago");
        assert_eq!(strip_accents("dolor de estómago"), "dolor de estomago");
    }
}
