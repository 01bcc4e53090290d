//! Common types for intent classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::Language;

/// Scores strictly below this count as blocked content in
/// [`IntentResult::is_blocked`], whatever the intent label.
pub const BLOCKED_CONTENT_SCORE: f64 = -0.5;

/// Discrete intent label of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Social greeting ("xin chào", "hello").
    Greeting,
    /// Question about the assistant itself ("bạn là ai").
    AboutBot,
    /// Off-domain topic (weather, news, politics).
    BlockedTopic,
    /// Financial query, total score >= 1.0.
    FinancialHighConfidence,
    /// Financial query, total score in [0.5, 1.0).
    FinancialMediumConfidence,
    /// Financial query, total score in (0, 0.5).
    FinancialLowConfidence,
    /// Nothing recognizable.
    Unknown,
}

impl Intent {
    /// All intent labels.
    pub const ALL: [Intent; 7] = [
        Intent::Greeting,
        Intent::AboutBot,
        Intent::BlockedTopic,
        Intent::FinancialHighConfidence,
        Intent::FinancialMediumConfidence,
        Intent::FinancialLowConfidence,
        Intent::Unknown,
    ];

    /// Get the wire name of this intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::AboutBot => "about_bot",
            Intent::BlockedTopic => "blocked_topic",
            Intent::FinancialHighConfidence => "financial_high_confidence",
            Intent::FinancialMediumConfidence => "financial_medium_confidence",
            Intent::FinancialLowConfidence => "financial_low_confidence",
            Intent::Unknown => "unknown",
        }
    }

    /// Returns true for the three financial confidence levels.
    pub fn is_financial(&self) -> bool {
        matches!(
            self,
            Intent::FinancialHighConfidence
                | Intent::FinancialMediumConfidence
                | Intent::FinancialLowConfidence
        )
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The term that made a category match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedTerm {
    /// Category name.
    pub category: String,
    /// The category term, as written in the keyword table.
    pub term: String,
}

/// Result of classifying one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResult {
    /// Intent label.
    pub intent: Intent,
    /// Heuristic confidence in [0, 1], rounded to 2 decimals.
    pub confidence: f64,
    /// Language of the raw message.
    pub language: Language,
    /// Raw weighted keyword score, rounded to 2 decimals.
    pub score: f64,
    /// Matched categories in table order; absent for the degenerate result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_categories: Option<Vec<String>>,
    /// First matching term of each matched category.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_terms: Vec<MatchedTerm>,
}

impl IntentResult {
    /// The degenerate result for absent or empty input.
    pub fn unknown() -> Self {
        IntentResult {
            intent: Intent::Unknown,
            confidence: 0.0,
            language: Language::Unknown,
            score: 0.0,
            matched_categories: None,
            matched_terms: Vec::new(),
        }
    }

    /// Matched category names, empty for the degenerate result.
    pub fn matched_categories(&self) -> &[String] {
        self.matched_categories.as_deref().unwrap_or(&[])
    }

    /// Returns true if the named category contributed to the score.
    pub fn has_category(&self, name: &str) -> bool {
        self.matched_categories().iter().any(|c| c == name)
    }

    /// Returns true if the message should be refused as off-domain.
    ///
    /// Either the intent is `blocked_topic` or the score is strictly below
    /// [`BLOCKED_CONTENT_SCORE`].
    pub fn is_blocked(&self) -> bool {
        self.intent == Intent::BlockedTopic || self.score < BLOCKED_CONTENT_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_wire_names() {
        for intent in Intent::ALL {
            let json = serde_json::to_string(&intent).unwrap();
            assert_eq!(json, format!("\"{}\"", intent.as_str()));
        }
    }

    #[test]
    fn test_is_financial() {
        assert!(Intent::FinancialHighConfidence.is_financial());
        assert!(Intent::FinancialLowConfidence.is_financial());
        assert!(!Intent::Greeting.is_financial());
        assert!(!Intent::Unknown.is_financial());
    }

    #[test]
    fn test_unknown_result_omits_categories() {
        let result = IntentResult::unknown();
        assert!(result.matched_categories().is_empty());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["intent"], "unknown");
        assert_eq!(json["language"], "unknown");
        assert!(json.get("matchedCategories").is_none());
        assert!(json.get("matchedTerms").is_none());
    }

    #[test]
    fn test_empty_categories_are_serialized() {
        let result = IntentResult {
            language: Language::En,
            matched_categories: Some(Vec::new()),
            ..IntentResult::unknown()
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["matchedCategories"], serde_json::json!([]));
    }

    #[test]
    fn test_is_blocked() {
        let mut result = IntentResult::unknown();
        assert!(!result.is_blocked());

        result.intent = Intent::BlockedTopic;
        assert!(result.is_blocked());

        result.intent = Intent::Greeting;
        result.score = -1.0;
        assert!(result.is_blocked());

        result.score = -0.5;
        assert!(!result.is_blocked());
    }
}
