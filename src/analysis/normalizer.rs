//! Text normalizer that chains char filters into a matching key.
//!
//! The normalizer applies its char filters in the order they were added.
//! The default Vietnamese normalizer lower-cases the text and then folds
//! diacritics, so `"Tiết Kiệm"` and `"tiet kiem"` produce the same key.
//!
//! # Examples
//!
//! ```
//! use vanlang_nlp::analysis::normalize;
//!
//! assert_eq!(normalize("Tiết kiệm"), "tiet kiem");
//! assert_eq!(normalize(""), "");
//! ```

use std::sync::{Arc, LazyLock};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::diacritic::VietnameseDiacriticCharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;

static DEFAULT_NORMALIZER: LazyLock<TextNormalizer> = LazyLock::new(TextNormalizer::vietnamese);

/// Normalize text with the default Vietnamese normalizer.
///
/// Lower-cases the text and replaces every accented Vietnamese character with
/// its plain Latin equivalent. The result is only used as a matching key.
pub fn normalize(text: &str) -> String {
    DEFAULT_NORMALIZER.normalize(text)
}

/// A chain of char filters producing a normalized matching key.
#[derive(Clone)]
pub struct TextNormalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
    name: String,
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("name", &self.name)
            .field(
                "char_filters",
                &self.char_filters.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::vietnamese()
    }
}

impl TextNormalizer {
    /// Create an empty normalizer that returns its input unchanged.
    pub fn new() -> Self {
        TextNormalizer {
            char_filters: Vec::new(),
            name: "identity".to_string(),
        }
    }

    /// Create the lowercase + Vietnamese diacritic folding normalizer.
    pub fn vietnamese() -> Self {
        Self::new()
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(VietnameseDiacriticCharFilter::new()))
            .with_name("vietnamese")
    }

    /// Add a char filter to the end of the chain.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Set a custom name for this normalizer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the name of this normalizer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the char filters used by this normalizer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Run every char filter over `text`.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        self.char_filters
            .iter()
            .fold(text.to_string(), |acc, char_filter| char_filter.filter(&acc))
    }
}
