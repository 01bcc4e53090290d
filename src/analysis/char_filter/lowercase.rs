//! Lowercase char filter implementation.

use super::CharFilter;

/// A char filter that converts the whole text to lowercase.
///
/// Uses Unicode-aware lowercasing, so accented capitals such as `Đ` or `Ế`
/// become their lowercase forms and can then be folded by
/// [`VietnameseDiacriticCharFilter`](super::diacritic::VietnameseDiacriticCharFilter).
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_char_filter() {
        let filter = LowercaseCharFilter::new();

        assert_eq!(filter.filter("Hello WORLD"), "hello world");
        assert_eq!(filter.filter("TIẾT KIỆM"), "tiết kiệm");
        assert_eq!(filter.filter("ĐỒNG"), "đồng");
        assert_eq!(filter.filter(""), "");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseCharFilter::new().name(), "lowercase");
    }
}
