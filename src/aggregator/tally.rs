//! Word frequency merging across sections.

use crate::codec::types::SectionResult;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Summed word counts over any number of sections.
///
/// Merging is order-independent: the ranking breaks count ties by the word
/// itself, never by arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTally {
    counts: HashMap<String, usize>,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally of the top words reported by a set of sections.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a SectionResult>) -> Self {
        let mut tally = Self::new();
        for result in results {
            tally.add_section(result);
        }
        tally
    }

    pub fn add(&mut self, word: &str, count: usize) {
        *self.counts.entry(word.to_string()).or_insert(0) += count;
    }

    pub fn add_section(&mut self, result: &SectionResult) {
        for (word, count) in &result.top_words {
            self.add(word, *count);
        }
    }

    /// Folds another tally into this one.
    pub fn merge(&mut self, other: WordTally) {
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }

    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// The `n` highest counts, ties in alphabetical order.
    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<(&String, &usize)> = self.counts.iter().collect();
        ranked.sort_by(|a, b| (Reverse(a.1), a.0).cmp(&(Reverse(b.1), b.0)));

        ranked
            .into_iter()
            .take(n)
            .map(|(word, count)| (word.clone(), *count))
            .collect()
    }
}
