//! Mood advice derived from the sentiment polarity of free text.

use serde::Serialize;
use utoipa::ToSchema;

/// Sentiment polarity clamped to `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Polarity(f64);

impl Polarity {
    /// Neutral polarity.
    pub const NEUTRAL: Self = Self(0.0);

    /// Clamp a raw score into `[-1, 1]`; non-finite scores become neutral.
    ///
    /// # Examples
    /// ```
    /// use sleepease::domain::Polarity;
    ///
    /// assert_eq!(Polarity::new(3.0).get(), 1.0);
    /// assert_eq!(Polarity::new(f64::NAN).get(), 0.0);
    /// ```
    #[must_use]
    pub fn new(score: f64) -> Self {
        if score.is_finite() {
            Self(score.clamp(-1.0, 1.0))
        } else {
            Self::NEUTRAL
        }
    }

    /// Raw score.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Fixed response chosen for a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MoodAdvice {
    /// No usable text was supplied.
    PromptForInput,
    /// Negative polarity.
    Comforting,
    /// Positive polarity.
    Motivating,
    /// Zero polarity.
    Neutral,
}

impl MoodAdvice {
    /// Choose the advice for a polarity by its sign.
    #[must_use]
    pub fn for_polarity(polarity: Polarity) -> Self {
        let score = polarity.get();
        if score < 0.0 {
            Self::Comforting
        } else if score > 0.0 {
            Self::Motivating
        } else {
            Self::Neutral
        }
    }

    /// Reply text sent back to the user.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::PromptForInput => "Please share how you're feeling.",
            Self::Comforting => {
                "Tough times don't last, but tough people do. Be gentle with yourself — this feeling will pass."
            }
            Self::Motivating => {
                "Keep going — you're doing amazing! Every step forward counts toward your success."
            }
            Self::Neutral => {
                "Stay steady and keep moving forward. Small progress each day makes a big difference."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-0.4, MoodAdvice::Comforting)]
    #[case(-1.0, MoodAdvice::Comforting)]
    #[case(0.0, MoodAdvice::Neutral)]
    #[case(0.01, MoodAdvice::Motivating)]
    #[case(1.0, MoodAdvice::Motivating)]
    fn advice_follows_polarity_sign(#[case] score: f64, #[case] expected: MoodAdvice) {
        assert_eq!(MoodAdvice::for_polarity(Polarity::new(score)), expected);
    }

    #[rstest]
    #[case(2.5, 1.0)]
    #[case(-7.0, -1.0)]
    #[case(f64::INFINITY, 0.0)]
    #[case(0.25, 0.25)]
    fn polarity_is_clamped(#[case] raw: f64, #[case] expected: f64) {
        assert_eq!(Polarity::new(raw).get(), expected);
    }

    #[rstest]
    fn prompt_message_is_stable() {
        assert_eq!(
            MoodAdvice::PromptForInput.message(),
            "Please share how you're feeling."
        );
    }
}
