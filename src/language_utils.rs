//! Language utilities for caption language tags
//!
//! Caption tracks are tagged with BCP 47-ish codes such as `en`, `en-US`
//! or `pt-BR`. Matching only ever needs the lowercased tag and its primary
//! subtag, so no locale-aware folding is done here.

use anyhow::{Result, anyhow};
use isolang::Language;

/// Lowercase a language tag; empty input yields an empty string
pub fn normalize(code: &str) -> String {
    code.to_ascii_lowercase()
}

/// Normalize an optional tag, treating `None` like the empty tag
pub fn normalize_opt(code: Option<&str>) -> String {
    code.map(normalize).unwrap_or_default()
}

/// Primary subtag of a language tag: `en-US` -> `en`, `en` -> `en`, `` -> ``
pub fn primary_subtag(code: &str) -> String {
    let normalized = normalize(code);
    match normalized.split_once('-') {
        Some((primary, _)) => primary.to_string(),
        None => normalized,
    }
}

/// Check whether two tags share the same primary subtag
pub fn same_primary_subtag(code1: &str, code2: &str) -> bool {
    let base1 = primary_subtag(code1);
    !base1.is_empty() && base1 == primary_subtag(code2)
}

/// Get the English language name for a caption language tag
///
/// Only the primary subtag is looked up, as a 2-letter ISO 639-1 code or
/// a 3-letter ISO 639-3 code.
pub fn get_language_name(code: &str) -> Result<String> {
    let primary = primary_subtag(code.trim());

    let lang = match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => Language::from_639_3(&primary),
        _ => None,
    };

    lang.map(|l| l.to_name().to_string())
        .ok_or_else(|| anyhow!("Unknown language code: {}", code))
}

