//! Keyword-weighted intent classifier.
//!
//! Scoring adds a category's weight once when any of its terms is a
//! substring of the normalized message. There is no tokenization: `"vang"`
//! also matches inside longer words. The score and the matched categories
//! then go through fixed priority rules:
//!
//! 1. `greeting` matched: greeting, confidence 0.9
//! 2. `about_bot` matched: about_bot, confidence 0.9
//! 3. score <= -0.5: blocked_topic, confidence 0.8
//! 4. score >= 1.0: financial_high_confidence, min(score / 2, 0.95)
//! 5. score >= 0.5: financial_medium_confidence, score * 0.7
//! 6. score > 0: financial_low_confidence, score * 0.5
//! 7. otherwise unknown, confidence 0

use std::sync::Arc;

use aho_corasick::AhoCorasick;
use log::{debug, trace};

use crate::analysis::{TextNormalizer, detect_language};
use crate::error::{NlpError, Result};
use crate::util::numeric::round2;

use super::classifier::IntentClassifier;
use super::keywords::{KeywordTable, category};
use super::types::{Intent, IntentResult, MatchedTerm};

const SOCIAL_CONFIDENCE: f64 = 0.9;
const BLOCKED_CONFIDENCE: f64 = 0.8;
const BLOCKED_THRESHOLD: f64 = -0.5;
const HIGH_THRESHOLD: f64 = 1.0;
const MEDIUM_THRESHOLD: f64 = 0.5;
const HIGH_CONFIDENCE_DIVISOR: f64 = 2.0;
const HIGH_CONFIDENCE_CAP: f64 = 0.95;
const MEDIUM_CONFIDENCE_FACTOR: f64 = 0.7;
const LOW_CONFIDENCE_FACTOR: f64 = 0.5;

/// Position of a term inside the keyword table.
#[derive(Debug, Clone, Copy)]
struct TermRef {
    category: usize,
    term: usize,
}

/// Raw output of the scoring pass.
#[derive(Debug, Clone, Default)]
struct Scored {
    total: f64,
    categories: Vec<String>,
    terms: Vec<MatchedTerm>,
}

/// Keyword-based intent classifier.
///
/// All terms are normalized once at construction and compiled into a single
/// Aho-Corasick automaton, so each message is scanned once regardless of the
/// table size. The classifier holds no per-call state and can be shared
/// across threads.
pub struct KeywordIntentClassifier {
    table: KeywordTable,
    normalizer: Arc<TextNormalizer>,
    matcher: AhoCorasick,
    /// Table positions of each distinct normalized pattern.
    pattern_owners: Vec<Vec<TermRef>>,
}

impl std::fmt::Debug for KeywordIntentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordIntentClassifier")
            .field("categories", &self.table.len())
            .field("terms", &self.table.term_count())
            .field("patterns", &self.pattern_owners.len())
            .field("normalizer", &self.normalizer.name())
            .finish()
    }
}

impl KeywordIntentClassifier {
    /// Create a classifier over `table` using the default Vietnamese normalizer.
    pub fn new(table: KeywordTable) -> Result<Self> {
        Self::with_normalizer(table, Arc::new(TextNormalizer::vietnamese()))
    }

    /// Create a classifier over the compiled-in keyword table.
    pub fn with_default_table() -> Result<Self> {
        Self::new(KeywordTable::default())
    }

    /// Create a classifier with a custom normalizer.
    ///
    /// Fails if a term normalizes to the empty string.
    pub fn with_normalizer(table: KeywordTable, normalizer: Arc<TextNormalizer>) -> Result<Self> {
        let mut patterns: Vec<String> = Vec::new();
        let mut pattern_owners: Vec<Vec<TermRef>> = Vec::new();

        for (category_idx, keyword_category) in table.categories().iter().enumerate() {
            for (term_idx, term) in keyword_category.all_terms().enumerate() {
                let normalized = normalizer.normalize(&term.to_lowercase());
                if normalized.is_empty() {
                    return Err(NlpError::analysis(format!(
                        "term '{}' of category '{}' normalizes to an empty string",
                        term, keyword_category.name
                    )));
                }

                let owner = TermRef {
                    category: category_idx,
                    term: term_idx,
                };
                match patterns.iter().position(|p| *p == normalized) {
                    Some(idx) => pattern_owners[idx].push(owner),
                    None => {
                        patterns.push(normalized);
                        pattern_owners.push(vec![owner]);
                    }
                }
            }
        }

        let matcher = AhoCorasick::new(&patterns)
            .map_err(|e| NlpError::Anyhow(anyhow::Error::from(e)))?;

        debug!(
            "built keyword matcher: {} categories, {} terms, {} distinct patterns",
            table.len(),
            table.term_count(),
            patterns.len()
        );

        Ok(Self {
            table,
            normalizer,
            matcher,
            pattern_owners,
        })
    }

    /// Get the keyword table.
    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    /// Get the normalizer.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Score a normalized message against every category.
    fn score(&self, normalized_message: &str) -> Scored {
        let categories = self.table.categories();

        // Lowest matching term index per category, i.e. where a sequential
        // vi-then-en scan would have stopped.
        let mut first_hit: Vec<Option<usize>> = vec![None; categories.len()];
        for m in self.matcher.find_overlapping_iter(normalized_message) {
            for owner in &self.pattern_owners[m.pattern().as_usize()] {
                let slot = &mut first_hit[owner.category];
                if slot.is_none_or(|current| owner.term < current) {
                    *slot = Some(owner.term);
                }
            }
        }

        let mut scored = Scored::default();
        for (keyword_category, hit) in categories.iter().zip(first_hit) {
            let Some(term_idx) = hit else {
                continue;
            };
            let term = keyword_category
                .all_terms()
                .nth(term_idx)
                .unwrap_or_default()
                .to_string();
            trace!(
                "category '{}' matched on '{}' (weight {})",
                keyword_category.name, term, keyword_category.weight
            );

            scored.total += keyword_category.weight;
            scored.categories.push(keyword_category.name.clone());
            scored.terms.push(MatchedTerm {
                category: keyword_category.name.clone(),
                term,
            });
        }

        scored
    }

    /// Apply the priority rules to a score and its matched categories.
    fn decide(categories: &[String], total: f64) -> (Intent, f64) {
        let matched = |name: &str| categories.iter().any(|c| c == name);

        if matched(category::GREETING) {
            (Intent::Greeting, SOCIAL_CONFIDENCE)
        } else if matched(category::ABOUT_BOT) {
            (Intent::AboutBot, SOCIAL_CONFIDENCE)
        } else if total <= BLOCKED_THRESHOLD {
            (Intent::BlockedTopic, BLOCKED_CONFIDENCE)
        } else if total >= HIGH_THRESHOLD {
            (
                Intent::FinancialHighConfidence,
                (total / HIGH_CONFIDENCE_DIVISOR).min(HIGH_CONFIDENCE_CAP),
            )
        } else if total >= MEDIUM_THRESHOLD {
            (
                Intent::FinancialMediumConfidence,
                total * MEDIUM_CONFIDENCE_FACTOR,
            )
        } else if total > 0.0 {
            (Intent::FinancialLowConfidence, total * LOW_CONFIDENCE_FACTOR)
        } else {
            (Intent::Unknown, 0.0)
        }
    }
}

impl IntentClassifier for KeywordIntentClassifier {
    fn classify(&self, message: &str) -> IntentResult {
        if message.is_empty() {
            return IntentResult::unknown();
        }

        let language = detect_language(message);
        let normalized = self.normalizer.normalize(&message.trim().to_lowercase());
        let scored = self.score(&normalized);
        let (intent, confidence) = Self::decide(&scored.categories, scored.total);

        debug!(
            "classified message as {} (score {:.2}, confidence {:.2}, language {}, categories {:?})",
            intent, scored.total, confidence, language, scored.categories
        );

        IntentResult {
            intent,
            confidence: round2(confidence),
            language,
            score: round2(scored.total),
            matched_categories: Some(scored.categories),
            matched_terms: scored.terms,
        }
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
