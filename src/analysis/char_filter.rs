//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the whole input string before it is used as a
//! matching key. They are chained by
//! [`TextNormalizer`](crate::analysis::normalizer::TextNormalizer).
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode-aware lower-casing
//! - [`diacritic::VietnameseDiacriticCharFilter`] - Vietnamese diacritic folding
//!
//! # Examples
//!
//! ```
//! use vanlang_nlp::analysis::char_filter::CharFilter;
//! use vanlang_nlp::analysis::char_filter::diacritic::VietnameseDiacriticCharFilter;
//!
//! let filter = VietnameseDiacriticCharFilter::new();
//! assert_eq!(filter.filter("tiết kiệm"), "tiet kiem");
//! ```

/// Trait for character filters that transform text before matching.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod diacritic;
pub mod lowercase;
