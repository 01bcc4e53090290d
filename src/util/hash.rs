//! Content hashing for cache keys.

/// MD5 digest of the UTF-8 bytes of `text`, as lowercase hex.
///
/// # Examples
///
/// ```
/// use vanlang_nlp::util::hash::generate_hash;
///
/// assert_eq!(generate_hash("hello"), "5d41402abc4b2a76b9719d911017c592");
/// ```
pub fn generate_hash(text: &str) -> String {
    format!("{:x}", md5::compute(text.as_bytes()))
}
