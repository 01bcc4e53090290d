//! Rule-based language understanding for finance chat messages.
//!
//! - [`intent_classifier`]: keyword-weighted intent scoring and classification
//! - [`sentiment`]: lexicon-based sentiment helper, independent of intents

pub mod intent_classifier;
pub mod sentiment;
