//! Text analysis module for vanlang-nlp.
//!
//! This module turns raw chat messages into matching keys: char filters
//! lower-case the text and fold Vietnamese diacritics, the normalizer chains
//! them, and the language detector tags the raw text as Vietnamese or
//! English.

pub mod char_filter;
pub mod language;
pub mod normalizer;

pub use language::{Language, detect_language};
pub use normalizer::{TextNormalizer, normalize};
