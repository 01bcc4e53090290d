//! Intent classifier trait definition.

use super::types::IntentResult;

/// Intent classifier trait.
///
/// Implementations map a chat message to an [`IntentResult`]. Classification
/// is total: every string, including the empty string, yields a result.
pub trait IntentClassifier: Send + Sync {
    /// Classify a message.
    fn classify(&self, message: &str) -> IntentResult;

    /// Classify a message that may be absent.
    ///
    /// `None` yields the degenerate [`IntentResult::unknown`] result.
    fn classify_opt(&self, message: Option<&str>) -> IntentResult {
        match message {
            Some(message) => self.classify(message),
            None => IntentResult::unknown(),
        }
    }

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
