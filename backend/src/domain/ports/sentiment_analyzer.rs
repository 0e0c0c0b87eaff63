//! Port for scoring the sentiment of free text.

use crate::domain::Polarity;

/// Scores text polarity in `[-1, 1]`.
#[cfg_attr(test, mockall::automock)]
pub trait SentimentAnalyzer: Send + Sync {
    /// Polarity of `text`; text with no sentiment scores neutral.
    fn polarity(&self, text: &str) -> Polarity;
}
