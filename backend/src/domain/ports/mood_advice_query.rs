//! Driving port for the stateless mood advisor.

use crate::domain::MoodAdvice;

/// Maps chat text to a fixed reply.
pub trait MoodAdviceQuery: Send + Sync {
    /// Advice for `text`; `None` or blank text yields
    /// [`MoodAdvice::PromptForInput`].
    fn advise(&self, text: Option<&str>) -> MoodAdvice;
}
