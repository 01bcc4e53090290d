//! Keyword-weighted intent classification for finance chat messages.
//!
//! A message is normalized (lower-cased, Vietnamese diacritics folded),
//! matched against a fixed table of weighted keyword categories, and the
//! resulting score is mapped to a discrete intent with a confidence value.
//!
//! # Architecture
//!
//! - `IntentClassifier` trait: Common interface for classifiers
//! - `KeywordIntentClassifier`: Weighted keyword matching implementation
//! - `KeywordTable` / `KeywordCategory`: Category configuration
//! - `Intent` / `IntentResult`: Classification output
//!
//! # Example
//!
//! ```
//! use vanlang_nlp::ml::intent_classifier::{self, Intent};
//!
//! # fn main() -> vanlang_nlp::error::Result<()> {
//! let classifier = intent_classifier::new_keyword_based(Default::default())?;
//!
//! let result = classifier.classify("Bạn là ai?");
//! assert_eq!(result.intent, Intent::AboutBot);
//! assert_eq!(result.confidence, 0.9);
//! # Ok(())
//! # }
//! ```

mod classifier;
mod factory;
mod keyword_classifier;
mod keywords;
mod types;

// Public exports
pub use classifier::IntentClassifier;
pub use factory::{load_keyword_table, new_keyword_based};
pub use keyword_classifier::KeywordIntentClassifier;
pub use keywords::{CategoryTerms, KeywordCategory, KeywordTable, category};
pub use types::{BLOCKED_CONTENT_SCORE, Intent, IntentResult, MatchedTerm};
