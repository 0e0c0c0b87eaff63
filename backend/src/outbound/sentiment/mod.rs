//! Lexicon-based sentiment analyzer.
//!
//! Text is split into lower-cased words. Each recognised word contributes its
//! lexicon polarity, scaled by any intensifiers directly before it and
//! flipped and halved (`× -0.5`) when a negator precedes it in the same
//! clause. The score is the mean of the contributions, clamped to `[-1, 1]`;
//! text without recognised words is neutral.

mod lexicon;

use crate::domain::Polarity;
use crate::domain::ports::SentimentAnalyzer;

use lexicon::{intensifier_factor, is_negator, word_polarity};

const NEGATION_FACTOR: f64 = -0.5;

/// Default [`SentimentAnalyzer`] backed by a built-in word list.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconSentimentAnalyzer;

impl LexiconSentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

enum Token<'a> {
    Word(&'a str),
    ClauseBreak,
}

fn tokens(text: &str) -> impl Iterator<Item = Token<'_>> {
    text.split_inclusive(|c: char| !(c.is_alphanumeric() || c == '\''))
        .flat_map(|chunk| {
            let (word, sep) = match chunk.char_indices().last() {
                Some((idx, c)) if !(c.is_alphanumeric() || c == '\'') => {
                    (chunk.get(..idx).unwrap_or_default(), Some(c))
                }
                _ => (chunk, None),
            };
            let word = word.trim_matches('\'');
            let word = (!word.is_empty()).then_some(Token::Word(word));
            let brk = sep
                .filter(|c| matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '\n'))
                .map(|_| Token::ClauseBreak);
            word.into_iter().chain(brk)
        })
}

impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    fn polarity(&self, text: &str) -> Polarity {
        let normalised = text.replace('\u{2019}', "'").to_lowercase();

        let mut contributions = Vec::new();
        let mut negated = false;
        let mut intensity = 1.0_f64;

        for token in tokens(&normalised) {
            let word = match token {
                Token::ClauseBreak => {
                    negated = false;
                    intensity = 1.0;
                    continue;
                }
                Token::Word(word) => word,
            };

            if is_negator(word) {
                negated = !negated;
                continue;
            }
            if let Some(factor) = intensifier_factor(word) {
                intensity *= factor;
                continue;
            }
            match word_polarity(word) {
                Some(score) => {
                    let mut score = score * intensity;
                    if negated {
                        score *= NEGATION_FACTOR;
                    }
                    contributions.push(score);
                    negated = false;
                    intensity = 1.0;
                }
                None => intensity = 1.0,
            }
        }

        if contributions.is_empty() {
            return Polarity::NEUTRAL;
        }
        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
        Polarity::new(mean)
    }
}
