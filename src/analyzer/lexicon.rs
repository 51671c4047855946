//! Sentiment Lexicon
//!
//! A fixed pair of word sets used for naive polarity scoring. The lexicon is
//! plain data handed to the analyzer, so tests and deployments can swap it.

use crate::codec::types::SentimentLabel;
use std::collections::HashSet;

const POSITIVE_WORDS: [&str; 19] = [
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "happy", "joy", "love",
    "perfect", "beautiful", "nice", "best", "positive", "success", "win", "pleasure", "delight",
    "brilliant",
];

const NEGATIVE_WORDS: [&str; 18] = [
    "bad", "terrible", "awful", "horrible", "hate", "angry", "sad", "unhappy", "disappointing",
    "poor", "worst", "negative", "failure", "lose", "problem", "issue", "wrong", "broken",
];

/// Positive and negative word sets. Entries are expected in normalized form
/// (lower-case, alphabetic only).
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl SentimentLexicon {
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    /// Polarity of a normalized word. A word listed in both sets counts as positive.
    pub fn polarity(&self, word: &str) -> Option<SentimentLabel> {
        if self.positive.contains(word) {
            Some(SentimentLabel::Positive)
        } else if self.negative.contains(word) {
            Some(SentimentLabel::Negative)
        } else {
            None
        }
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new(POSITIVE_WORDS, NEGATIVE_WORDS)
    }
}
