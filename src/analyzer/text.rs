//! Per-section text analyses.
//!
//! Every function here is pure and works on one section's text, so sections can
//! be analyzed on any worker in any order.

use super::lexicon::SentimentLexicon;
use crate::codec::types::SentimentLabel;
use crate::error::{PipelineError, Result};
use crate::sectionizer::sentences;
use regex::{NoExpand, Regex};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Scores above this are positive, scores below its negation are negative.
const SENTIMENT_THRESHOLD: f64 = 0.1;

/// Shape of a redacted name: one upper-case letter, then lower-case letters, as a whole word.
const NAME_PATTERN: &str = r"\b[A-Z][a-z]+\b";

pub const DEFAULT_PLACEHOLDER: &str = "FFFFF";

/// Counts whitespace-separated tokens that are non-empty after dropping at most
/// one non-alphabetic character from each end.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .map(strip_one_edge)
        .filter(|token| !token.is_empty())
        .count()
}

fn strip_one_edge(token: &str) -> &str {
    let token = match token.chars().next_back() {
        Some(c) if !c.is_ascii_alphabetic() => &token[..token.len() - c.len_utf8()],
        _ => token,
    };
    match token.chars().next() {
        Some(c) if !c.is_ascii_alphabetic() => &token[c.len_utf8()..],
        _ => token,
    }
}

/// Lower-cases a token and keeps only its ASCII letters.
pub fn normalize_word(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Normalized, non-empty words of a text in order of appearance.
pub fn normalized_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|word| !word.is_empty())
}

/// The `k` most frequent normalized words, count-descending.
/// Words with equal counts keep the order in which they first appeared.
pub fn top_words(text: &str, k: usize) -> Vec<(String, usize)> {
    // word -> (count, first position)
    let mut frequencies: HashMap<String, (usize, usize)> = HashMap::new();

    for (position, word) in normalized_words(text).enumerate() {
        frequencies.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = frequencies.into_iter().collect();
    ranked.sort_by_key(|(_, (count, first_seen))| (Reverse(*count), *first_seen));

    ranked
        .into_iter()
        .take(k)
        .map(|(word, (count, _))| (word, count))
        .collect()
}

/// Naive lexicon polarity: `(positive - negative) / total` over normalized words.
///
/// A text without words is neutral with a score of 0.
pub fn score_sentiment(text: &str, lexicon: &SentimentLexicon) -> (SentimentLabel, f64) {
    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut total = 0usize;

    for word in normalized_words(text) {
        total += 1;
        match lexicon.polarity(&word) {
            Some(SentimentLabel::Positive) => positive += 1,
            Some(SentimentLabel::Negative) => negative += 1,
            _ => {}
        }
    }

    if total == 0 {
        return (SentimentLabel::Neutral, 0.0);
    }

    let score = (positive as f64 - negative as f64) / total as f64;
    (label_for_score(score), score)
}

pub fn label_for_score(score: f64) -> SentimentLabel {
    if score > SENTIMENT_THRESHOLD {
        SentimentLabel::Positive
    } else if score < -SENTIMENT_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Sentences of the text ordered longest first (by character count).
/// The sort is stable, so equal lengths keep their original order.
pub fn rank_sentences(text: &str) -> Vec<String> {
    let mut ranked: Vec<&str> = sentences(text).collect();
    ranked.sort_by_key(|sentence| Reverse(sentence.chars().count()));
    ranked.into_iter().map(str::to_string).collect()
}

/// Replaces every capitalized word (`Xxxx`) with a placeholder.
///
/// This is a lexical filter, not name detection: sentence-initial words are
/// redacted too, while `McDonald` or `ALLCAPS` are not.
#[derive(Debug, Clone)]
pub struct NameRedactor {
    pattern: Regex,
    placeholder: String,
}

impl NameRedactor {
    pub fn new(placeholder: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(NAME_PATTERN)
            .map_err(|e| PipelineError::Config(format!("invalid name pattern: {}", e)))?;

        Ok(Self {
            pattern,
            placeholder: placeholder.into(),
        })
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn redact(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(&self.placeholder))
            .into_owned()
    }
}
