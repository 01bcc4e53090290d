//! # vanlang-nlp
//!
//! Rule-based intent classification for a personal finance chatbot that
//! talks Vietnamese and English.
//!
//! ## Features
//!
//! - Vietnamese diacritic folding and case normalization
//! - Heuristic Vietnamese/English language detection
//! - Weighted keyword scoring with intent and confidence decision rules
//! - Off-domain (blocked topic) detection
//! - Lexicon sentiment, content hashing and reply enhancement helpers

pub mod analysis;
pub mod cli;
pub mod error;
pub mod ml;
pub mod service;
pub mod util;

pub mod prelude {
    pub use crate::analysis::{Language, detect_language, normalize};
    pub use crate::error::{NlpError, Result};
    pub use crate::ml::intent_classifier::{
        Intent, IntentClassifier, IntentResult, KeywordIntentClassifier, KeywordTable,
    };
    pub use crate::ml::sentiment::{Sentiment, SentimentLabel, analyze_sentiment};
    pub use crate::service::NlpService;
    pub use crate::util::hash::generate_hash;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
