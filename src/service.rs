//! NLP service facade used by the chat layer.
//!
//! [`NlpService`] bundles intent classification, blocked-content checks,
//! language detection, normalization, sentiment, content hashing and
//! response enhancement behind one shareable value.
//!
//! # Examples
//!
//! ```
//! use vanlang_nlp::ml::intent_classifier::Intent;
//! use vanlang_nlp::service::NlpService;
//!
//! # fn main() -> vanlang_nlp::error::Result<()> {
//! let service = NlpService::new()?;
//!
//! let result = service.analyze_intent("thời tiết hôm nay");
//! assert_eq!(result.intent, Intent::BlockedTopic);
//! assert!(service.is_blocked_content("thời tiết hôm nay"));
//!
//! let absent = service.analyze_intent(None);
//! assert_eq!(absent.intent, Intent::Unknown);
//! # Ok(())
//! # }
//! ```

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::{self, Language};
use crate::error::Result;
use crate::ml::intent_classifier::{
    IntentClassifier, IntentResult, KeywordTable, new_keyword_based,
};
use crate::ml::sentiment::{self, Sentiment};
use crate::util::hash;

/// Service name reported by [`NlpService::stats`].
pub const SERVICE_NAME: &str = "NLP Service";

/// Capabilities reported by [`NlpService::stats`].
pub const CAPABILITIES: &[&str] = &[
    "Intent Classification",
    "Language Detection",
    "Vietnamese Text Normalization",
    "Basic Sentiment Analysis",
    "Content Filtering",
];

const HIGH_SPENDING_SUGGESTION_VI: &str = "\n\n💡 Gợi ý: Bạn có thể cân nhắc thiết lập ngân sách chi tiêu để kiểm soát tốt hơn.";

/// Options for [`NlpService::enhance_response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnhanceOptions {
    /// Language the user prefers replies in.
    pub preferred_language: Language,
    /// Whether the user's recent spending is flagged as high.
    pub has_high_spending: bool,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        EnhanceOptions {
            preferred_language: Language::Vi,
            has_high_spending: false,
        }
    }
}

/// Static description of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStats {
    pub service: String,
    pub version: String,
    pub capabilities: Vec<String>,
    pub supported_languages: Vec<Language>,
    pub category_count: usize,
    pub term_count: usize,
}

/// Intent, moderation and text helpers for chat messages.
///
/// Holds only immutable configuration; share it freely across threads.
pub struct NlpService {
    classifier: Box<dyn IntentClassifier>,
    category_count: usize,
    term_count: usize,
}

impl std::fmt::Debug for NlpService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NlpService")
            .field("classifier", &self.classifier.name())
            .field("category_count", &self.category_count)
            .field("term_count", &self.term_count)
            .finish()
    }
}

impl NlpService {
    /// Create a service over the compiled-in keyword table.
    pub fn new() -> Result<Self> {
        Self::with_keyword_table(KeywordTable::default())
    }

    /// Create a service over a custom keyword table.
    pub fn with_keyword_table(table: KeywordTable) -> Result<Self> {
        let category_count = table.len();
        let term_count = table.term_count();
        let classifier = new_keyword_based(table)?;
        info!(
            "NLP service initialized ({} categories, {} terms)",
            category_count,
            term_count
        );

        Ok(Self {
            classifier,
            category_count,
            term_count,
        })
    }

    /// Classify a message. Absent and empty messages yield the degenerate
    /// `unknown` result.
    pub fn analyze_intent<'a>(&self, message: impl Into<Option<&'a str>>) -> IntentResult {
        self.classifier.classify_opt(message.into())
    }

    /// Returns true if the message should be refused as off-domain.
    pub fn is_blocked_content<'a>(&self, message: impl Into<Option<&'a str>>) -> bool {
        self.analyze_intent(message).is_blocked()
    }

    /// Detect the language of raw text.
    pub fn detect_language<'a>(&self, text: impl Into<Option<&'a str>>) -> Language {
        analysis::detect_language(text.into().unwrap_or_default())
    }

    /// Normalize text into its matching key.
    pub fn normalize<'a>(&self, text: impl Into<Option<&'a str>>) -> String {
        analysis::normalize(text.into().unwrap_or_default())
    }

    /// Lexicon-based sentiment of `text`.
    pub fn analyze_sentiment(&self, text: &str, language: Language) -> Sentiment {
        sentiment::analyze_sentiment(text, language)
    }

    /// MD5 hex digest of the raw text, for cache keys.
    pub fn generate_hash(&self, text: &str) -> String {
        hash::generate_hash(text)
    }

    /// Append contextual suggestions to a reply.
    ///
    /// Only a high-spending hint for Vietnamese readers exists today.
    pub fn enhance_response(&self, text: &str, options: EnhanceOptions) -> String {
        let mut enhanced = text.to_string();
        if options.has_high_spending && options.preferred_language == Language::Vi {
            enhanced.push_str(HIGH_SPENDING_SUGGESTION_VI);
        }
        enhanced
    }

    /// Describe the service.
    pub fn stats(&self) -> ServiceStats {
        ServiceStats {
            service: SERVICE_NAME.to_string(),
            version: crate::VERSION.to_string(),
            capabilities: CAPABILITIES.iter().map(|c| c.to_string()).collect(),
            supported_languages: vec![Language::Vi, Language::En],
            category_count: self.category_count,
            term_count: self.term_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::intent_classifier::{Intent, KeywordCategory};

    fn service() -> NlpService {
        NlpService::new().unwrap()
    }

    #[test]
    fn test_analyze_intent_accepts_str_and_option() {
        let service = service();
        assert_eq!(service.analyze_intent("budget").intent, Intent::FinancialHighConfidence);
        assert_eq!(
            service.analyze_intent(Some("budget")).intent,
            Intent::FinancialHighConfidence
        );
        assert_eq!(service.analyze_intent(None), IntentResult::unknown());
        assert_eq!(service.analyze_intent(""), IntentResult::unknown());
    }

    #[test]
    fn test_is_blocked_content() {
        let service = service();
        assert!(service.is_blocked_content("What is the weather today"));
        assert!(service.is_blocked_content("tin tức"));
        assert!(!service.is_blocked_content("ngân sách tháng này"));
        assert!(!service.is_blocked_content(None));
    }

    #[test]
    fn test_detect_language_and_normalize_absent() {
        let service = service();
        assert_eq!(service.detect_language(None), Language::Unknown);
        assert_eq!(service.detect_language("Xin chào"), Language::Vi);
        assert_eq!(service.normalize(None), "");
        assert_eq!(service.normalize("Xin Chào"), "xin chao");
    }

    #[test]
    fn test_enhance_response() {
        let service = service();
        let text = "Bạn đã chi 5 triệu tháng này.";

        let plain = service.enhance_response(text, EnhanceOptions::default());
        assert_eq!(plain, text);

        let enhanced = service.enhance_response(
            text,
            EnhanceOptions {
                has_high_spending: true,
                ..Default::default()
            },
        );
        assert!(enhanced.starts_with(text));
        assert!(enhanced.ends_with("để kiểm soát tốt hơn."));
        assert!(enhanced.contains("\n\n💡 Gợi ý:"));

        let english = service.enhance_response(
            text,
            EnhanceOptions {
                preferred_language: Language::En,
                has_high_spending: true,
            },
        );
        assert_eq!(english, text);
    }

    #[test]
    fn test_enhance_options_from_partial_json() {
        let options: EnhanceOptions = serde_json::from_str(r#"{"hasHighSpending": true}"#).unwrap();
        assert_eq!(options.preferred_language, Language::Vi);
        assert!(options.has_high_spending);

        let json = serde_json::to_value(EnhanceOptions::default()).unwrap();
        assert_eq!(json["preferredLanguage"], "vi");
        assert_eq!(json["hasHighSpending"], false);
    }

    #[test]
    fn test_stats_wire_format() {
        let json = serde_json::to_value(service().stats()).unwrap();
        assert_eq!(json["service"], "NLP Service");
        assert_eq!(json["supportedLanguages"], serde_json::json!(["vi", "en"]));
        assert_eq!(json["categoryCount"], 6);
        assert_eq!(json["termCount"], 82);
        assert!(json.get("supported_languages").is_none());
    }

    #[test]
    fn test_stats() {
        let stats = service().stats();
        assert_eq!(stats.service, "NLP Service");
        assert_eq!(stats.capabilities.len(), 5);
        assert_eq!(stats.supported_languages, vec![Language::Vi, Language::En]);
        assert_eq!(stats.category_count, 6);
        assert_eq!(stats.term_count, 82);
    }

    #[test]
    fn test_custom_table_stats() {
        let table = KeywordTable::new(vec![KeywordCategory::new(
            "loan",
            vec![],
            vec!["loan".into(), "debt".into()],
            1.0,
        )])
        .unwrap();
        let service = NlpService::with_keyword_table(table).unwrap();
        let stats = service.stats();
        assert_eq!(stats.category_count, 1);
        assert_eq!(stats.term_count, 2);
        assert_eq!(service.analyze_intent("my debt").matched_categories(), ["loan"]);
    }

    #[test]
    fn test_service_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NlpService>();
    }
}
