//! Stateless mood advisor.

use std::sync::Arc;

use crate::domain::MoodAdvice;
use crate::domain::ports::{MoodAdviceQuery, SentimentAnalyzer};

/// Chooses a fixed reply from the sign of the text's polarity.
///
/// Only an absent or empty message gets the prompt. Whitespace is a message
/// with no scoring words, so it is scored like any other and lands on the
/// neutral reply.
#[derive(Clone)]
pub struct MoodAdvisor<S: ?Sized> {
    analyzer: Arc<S>,
}

impl<S: ?Sized> MoodAdvisor<S> {
    pub fn new(analyzer: Arc<S>) -> Self {
        Self { analyzer }
    }
}

impl<S> MoodAdviceQuery for MoodAdvisor<S>
where
    S: SentimentAnalyzer + ?Sized,
{
    fn advise(&self, text: Option<&str>) -> MoodAdvice {
        match text {
            None | Some("") => MoodAdvice::PromptForInput,
            Some(text) => MoodAdvice::for_polarity(self.analyzer.polarity(text.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Polarity;
    use crate::domain::ports::MockSentimentAnalyzer;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn missing_input_prompts_without_scoring(#[case] text: Option<&str>) {
        let mut analyzer = MockSentimentAnalyzer::new();
        analyzer.expect_polarity().never();
        let advisor = MoodAdvisor::new(Arc::new(analyzer));
        assert_eq!(advisor.advise(text), MoodAdvice::PromptForInput);
    }

    #[rstest]
    #[case(-0.6, MoodAdvice::Comforting)]
    #[case(0.0, MoodAdvice::Neutral)]
    #[case(0.3, MoodAdvice::Motivating)]
    fn scored_input_maps_by_sign(#[case] score: f64, #[case] expected: MoodAdvice) {
        let mut analyzer = MockSentimentAnalyzer::new();
        analyzer
            .expect_polarity()
            .withf(|text| text == "some words")
            .times(1)
            .return_const(Polarity::new(score));
        let advisor = MoodAdvisor::new(Arc::new(analyzer));
        assert_eq!(advisor.advise(Some("  some words ")), expected);
    }

    #[rstest]
    fn whitespace_is_scored_rather_than_prompted() {
        let mut analyzer = MockSentimentAnalyzer::new();
        analyzer
            .expect_polarity()
            .withf(|text| text.is_empty())
            .times(1)
            .return_const(Polarity::NEUTRAL);
        let advisor = MoodAdvisor::new(Arc::new(analyzer));
        assert_eq!(advisor.advise(Some("  \n\t")), MoodAdvice::Neutral);
    }
}
