//! Heuristic Vietnamese/English language detection.
//!
//! This is not a language identification model. Text is tagged Vietnamese
//! when it carries at least one Vietnamese diacritic or one of a handful of
//! common Vietnamese function words; everything else is English. Detection
//! runs on the raw text, so unaccented Vietnamese is reported as English.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::diacritic::is_vietnamese_diacritic;

/// Common Vietnamese function words, matched as raw substrings.
pub const VIETNAMESE_FUNCTION_WORDS: &[&str] =
    &["tôi", "bạn", "của", "là", "và", "có", "này", "được"];

/// Language tag attached to analysis results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Vietnamese.
    Vi,
    /// English.
    En,
    /// Empty or absent input.
    Unknown,
}

impl Language {
    /// Get the language code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Vi => "vi",
            Language::En => "en",
            Language::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect whether `text` is Vietnamese or English.
///
/// Returns [`Language::Unknown`] for empty text.
///
/// # Examples
///
/// ```
/// use vanlang_nlp::analysis::{Language, detect_language};
///
/// assert_eq!(detect_language("Tôi muốn xem chi tiêu"), Language::Vi);
/// assert_eq!(detect_language("How much did I spend"), Language::En);
/// assert_eq!(detect_language(""), Language::Unknown);
/// ```
pub fn detect_language(text: &str) -> Language {
    if text.is_empty() {
        return Language::Unknown;
    }

    let has_diacritic = text.chars().any(is_vietnamese_diacritic);
    if has_diacritic
        || VIETNAMESE_FUNCTION_WORDS
            .iter()
            .any(|word| text.contains(word))
    {
        Language::Vi
    } else {
        Language::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_vietnamese() {
        assert_eq!(detect_language("Tôi muốn xem chi tiêu"), Language::Vi);
        assert_eq!(detect_language("Bạn là ai?"), Language::Vi);
        assert_eq!(detect_language("ĐỒNG"), Language::Vi);
    }

    #[test]
    fn test_detect_english() {
        assert_eq!(detect_language("How much did I spend"), Language::En);
        assert_eq!(detect_language("   "), Language::En);
        // Unaccented Vietnamese carries no signal on the raw text.
        assert_eq!(detect_language("toi muon xem chi tieu"), Language::En);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_language(""), Language::Unknown);
    }

    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::Vi).unwrap(), "\"vi\"");
        assert_eq!(serde_json::to_string(&Language::Unknown).unwrap(), "\"unknown\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
        assert_eq!(Language::Vi.to_string(), "vi");
    }
}
