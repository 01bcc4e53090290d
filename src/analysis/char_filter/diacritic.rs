//! Vietnamese diacritic folding.
//!
//! Maps every lowercase Vietnamese vowel with a tone or vowel mark (and `đ`)
//! to its plain Latin letter. The filter expects lower-cased input; run
//! [`LowercaseCharFilter`](super::lowercase::LowercaseCharFilter) first.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::CharFilter;

/// Substitution table: accented character and its plain equivalent.
#[rustfmt::skip]
pub const VIETNAMESE_DIACRITICS: &[(char, char)] = &[
    ('à', 'a'), ('á', 'a'), ('ạ', 'a'), ('ả', 'a'), ('ã', 'a'),
    ('â', 'a'), ('ầ', 'a'), ('ấ', 'a'), ('ậ', 'a'), ('ẩ', 'a'), ('ẫ', 'a'),
    ('ă', 'a'), ('ằ', 'a'), ('ắ', 'a'), ('ặ', 'a'), ('ẳ', 'a'), ('ẵ', 'a'),
    ('è', 'e'), ('é', 'e'), ('ẹ', 'e'), ('ẻ', 'e'), ('ẽ', 'e'),
    ('ê', 'e'), ('ề', 'e'), ('ế', 'e'), ('ệ', 'e'), ('ể', 'e'), ('ễ', 'e'),
    ('ì', 'i'), ('í', 'i'), ('ị', 'i'), ('ỉ', 'i'), ('ĩ', 'i'),
    ('ò', 'o'), ('ó', 'o'), ('ọ', 'o'), ('ỏ', 'o'), ('õ', 'o'),
    ('ô', 'o'), ('ồ', 'o'), ('ố', 'o'), ('ộ', 'o'), ('ổ', 'o'), ('ỗ', 'o'),
    ('ơ', 'o'), ('ờ', 'o'), ('ớ', 'o'), ('ợ', 'o'), ('ở', 'o'), ('ỡ', 'o'),
    ('ù', 'u'), ('ú', 'u'), ('ụ', 'u'), ('ủ', 'u'), ('ũ', 'u'),
    ('ư', 'u'), ('ừ', 'u'), ('ứ', 'u'), ('ự', 'u'), ('ử', 'u'), ('ữ', 'u'),
    ('ỳ', 'y'), ('ý', 'y'), ('ỵ', 'y'), ('ỷ', 'y'), ('ỹ', 'y'),
    ('đ', 'd'),
];

static DIACRITIC_MAP: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| VIETNAMESE_DIACRITICS.iter().copied().collect());

/// Returns the plain letter for a lowercase accented Vietnamese character.
pub fn fold_diacritic(c: char) -> Option<char> {
    DIACRITIC_MAP.get(&c).copied()
}

/// Returns true if `c`, in either case, is one of the accented characters
/// of the substitution table.
pub fn is_vietnamese_diacritic(c: char) -> bool {
    c.to_lowercase().any(|lower| DIACRITIC_MAP.contains_key(&lower))
}

/// A char filter that strips Vietnamese diacritics.
#[derive(Clone, Debug, Default)]
pub struct VietnameseDiacriticCharFilter;

impl VietnameseDiacriticCharFilter {
    /// Create a new diacritic folding filter.
    pub fn new() -> Self {
        VietnameseDiacriticCharFilter
    }
}

impl CharFilter for VietnameseDiacriticCharFilter {
    fn filter(&self, input: &str) -> String {
        input
            .chars()
            .map(|c| fold_diacritic(c).unwrap_or(c))
            .collect()
    }

    fn name(&self) -> &'static str {
        "vietnamese_diacritic"
    }
}
