//! Keyword categories and the compiled-in default table.
//!
//! A category contributes its weight to a message's score when any of its
//! terms occurs in the normalized message. Table order is significant: it is
//! the order in which matched categories are reported.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{NlpError, Result};

/// Well-known category names used by the decision rules.
pub mod category {
    pub const GREETING: &str = "greeting";
    pub const FINANCIAL_PRIMARY: &str = "financial_primary";
    pub const FINANCIAL_SECONDARY: &str = "financial_secondary";
    pub const FINANCIAL_CONTEXTUAL: &str = "financial_contextual";
    pub const ABOUT_BOT: &str = "about_bot";
    pub const BLOCKED_TOPICS: &str = "blocked_topics";
}

struct CategoryDef {
    name: &'static str,
    vi: &'static [&'static str],
    en: &'static [&'static str],
    weight: f64,
}

const DEFAULT_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: category::GREETING,
        vi: &["chào", "xin chào", "hello", "hi", "chao", "xin chao"],
        en: &["hello", "hi", "hey", "greetings"],
        weight: 1.0,
    },
    CategoryDef {
        name: category::FINANCIAL_PRIMARY,
        vi: &[
            "tài chính",
            "tai chinh",
            "ngân sách",
            "ngan sach",
            "thu nhập",
            "thu nhap",
            "chi tiêu",
            "chi tieu",
            "tiết kiệm",
            "tiet kiem",
        ],
        en: &[
            "finance",
            "financial",
            "budget",
            "budgeting",
            "income",
            "expense",
            "saving",
            "savings",
        ],
        weight: 1.0,
    },
    CategoryDef {
        name: category::FINANCIAL_SECONDARY,
        vi: &[
            "đầu tư",
            "dau tu",
            "cổ phiếu",
            "co phieu",
            "vàng",
            "vang",
            "bitcoin",
            "crypto",
            "tiền điện tử",
            "tien dien tu",
        ],
        en: &[
            "investment",
            "invest",
            "stock",
            "stocks",
            "gold",
            "crypto",
            "cryptocurrency",
            "bitcoin",
        ],
        weight: 0.8,
    },
    CategoryDef {
        name: category::FINANCIAL_CONTEXTUAL,
        vi: &["tiền", "tien", "money", "đồng", "dong", "vnd", "vndong"],
        en: &["money", "cash", "dollar", "currency"],
        weight: 0.5,
    },
    CategoryDef {
        name: category::ABOUT_BOT,
        vi: &["bạn là ai", "ban la ai", "giúp gì", "giup gi", "bot", "vanlangbot"],
        en: &["who are you", "what can you do", "help", "bot", "assistant"],
        weight: 1.0,
    },
    CategoryDef {
        name: category::BLOCKED_TOPICS,
        vi: &[
            "thời tiết",
            "thoi tiet",
            "weather",
            "tin tức",
            "tin tuc",
            "news",
            "chính trị",
            "chinh tri",
            "politics",
        ],
        en: &["weather", "news", "politics", "religion", "sports"],
        weight: -1.0,
    },
];

/// Terms of a category, per language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTerms {
    /// Vietnamese terms, accented and unaccented variants.
    #[serde(default)]
    pub vi: Vec<String>,
    /// English terms.
    #[serde(default)]
    pub en: Vec<String>,
}

/// A named, weighted set of keyword terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCategory {
    /// Category identifier.
    pub name: String,
    /// Terms by language.
    pub terms: CategoryTerms,
    /// Signed weight added to the score when the category matches.
    pub weight: f64,
}

impl KeywordCategory {
    /// Create a new category.
    pub fn new<S: Into<String>>(name: S, vi: Vec<String>, en: Vec<String>, weight: f64) -> Self {
        KeywordCategory {
            name: name.into(),
            terms: CategoryTerms { vi, en },
            weight,
        }
    }

    /// All terms in scan order: Vietnamese first, then English.
    pub fn all_terms(&self) -> impl Iterator<Item = &str> {
        self.terms
            .vi
            .iter()
            .chain(self.terms.en.iter())
            .map(String::as_str)
    }

    /// Number of terms across both languages.
    pub fn term_count(&self) -> usize {
        self.terms.vi.len() + self.terms.en.len()
    }
}

/// An ordered, validated list of keyword categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeywordTable {
    categories: Vec<KeywordCategory>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|def| {
                KeywordCategory::new(
                    def.name,
                    def.vi.iter().map(|s| s.to_string()).collect(),
                    def.en.iter().map(|s| s.to_string()).collect(),
                    def.weight,
                )
            })
            .collect();
        KeywordTable { categories }
    }
}

impl KeywordTable {
    /// Create a table from categories, validating them.
    ///
    /// Fails if the list is empty, a name is blank or repeated, a weight is
    /// not finite, or a term is empty.
    pub fn new(categories: Vec<KeywordCategory>) -> Result<Self> {
        if categories.is_empty() {
            return Err(NlpError::config("keyword table has no categories"));
        }

        let mut seen = HashSet::new();
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(NlpError::config("category name must not be blank"));
            }
            if !seen.insert(category.name.as_str()) {
                return Err(NlpError::config(format!(
                    "duplicate category '{}'",
                    category.name
                )));
            }
            if !category.weight.is_finite() {
                return Err(NlpError::config(format!(
                    "category '{}' has a non-finite weight",
                    category.name
                )));
            }
            if category.all_terms().any(str::is_empty) {
                return Err(NlpError::config(format!(
                    "category '{}' contains an empty term",
                    category.name
                )));
            }
            if category.term_count() == 0 {
                warn!("category '{}' has no terms and will never match", category.name);
            }
        }

        Ok(KeywordTable { categories })
    }

    /// Parse and validate a table from a JSON array of categories.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let categories: Vec<KeywordCategory> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    /// Load and validate a table from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let table = Self::from_json_str(&content)?;
        info!(
            "loaded keyword table from {} ({} categories, {} terms)",
            path.display(),
            table.len(),
            table.term_count()
        );
        Ok(table)
    }

    /// Categories in table order.
    pub fn categories(&self) -> &[KeywordCategory] {
        &self.categories
    }

    /// Look up a category by name.
    pub fn get(&self, name: &str) -> Option<&KeywordCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the table has no categories. Validated tables never do.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of terms across all categories.
    pub fn term_count(&self) -> usize {
        self.categories.iter().map(KeywordCategory::term_count).sum()
    }
}
