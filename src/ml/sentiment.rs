//! Lexicon-based sentiment helper.
//!
//! Counts which entries of two tiny mixed Vietnamese/English lexicons occur
//! in the normalized text. Each entry counts at most once, and entries are
//! plain substrings, so short entries like `"te"` fire inside many words.
//! This is not wired into intent classification.

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::analysis::{Language, normalize};
use crate::util::numeric::round2;

/// Positive lexicon.
pub const POSITIVE_WORDS: &[&str] = &[
    "tốt", "tot", "hay", "good", "great", "excellent", "tuyệt", "tuyet",
];

/// Negative lexicon.
pub const NEGATIVE_WORDS: &[&str] = &["xấu", "xau", "bad", "terrible", "awful", "tệ", "te"];

const LABEL_THRESHOLD: f64 = 0.1;

/// Sentiment polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// Sentiment of a text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// (positive - negative) / max(positive + negative, 1), rounded to 2 decimals.
    pub score: f64,
    /// Absolute value of the unrounded score.
    pub magnitude: f64,
    /// Polarity label.
    pub label: SentimentLabel,
}

fn count_present(normalized: &str, lexicon: &[&str]) -> usize {
    lexicon
        .iter()
        .filter(|word| normalized.contains(normalize(word).as_str()))
        .count()
}

/// Analyze the sentiment of `text`.
///
/// `language` is accepted for callers that track it; both lexicons are
/// always consulted.
///
/// # Examples
///
/// ```
/// use vanlang_nlp::analysis::Language;
/// use vanlang_nlp::ml::sentiment::{SentimentLabel, analyze_sentiment};
///
/// let sentiment = analyze_sentiment("good job", Language::En);
/// assert_eq!(sentiment.label, SentimentLabel::Positive);
/// assert_eq!(sentiment.score, 1.0);
/// ```
pub fn analyze_sentiment(text: &str, language: Language) -> Sentiment {
    let normalized = normalize(text);

    let positive = count_present(&normalized, POSITIVE_WORDS);
    let negative = count_present(&normalized, NEGATIVE_WORDS);
    trace!(
        "sentiment counts for {} text: {} positive, {} negative",
        language, positive, negative
    );

    let score = (positive as f64 - negative as f64) / (positive + negative).max(1) as f64;
    let label = if score > LABEL_THRESHOLD {
        SentimentLabel::Positive
    } else if score < -LABEL_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    Sentiment {
        score: round2(score),
        magnitude: score.abs(),
        label,
    }
}
