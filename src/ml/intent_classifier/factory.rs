//! Helper functions for creating intent classifiers.

use std::path::Path;

use crate::error::Result;
use crate::ml::intent_classifier::classifier::IntentClassifier;
use crate::ml::intent_classifier::keyword_classifier::KeywordIntentClassifier;
use crate::ml::intent_classifier::keywords::KeywordTable;

/// Load a keyword table from a JSON file, or the compiled-in table if no
/// path is given.
pub fn load_keyword_table<P: AsRef<Path>>(path: Option<P>) -> Result<KeywordTable> {
    match path {
        Some(path) => KeywordTable::from_json_file(path),
        None => Ok(KeywordTable::default()),
    }
}

/// Create a new keyword-based intent classifier.
pub fn new_keyword_based(table: KeywordTable) -> Result<Box<dyn IntentClassifier>> {
    Ok(Box::new(KeywordIntentClassifier::new(table)?))
}
