//! Corpus State Machine
//!
//! The aggregator's only mutable state. Results and the section-count
//! announcement share one queue and may arrive in any interleaving, so the
//! state records results even before the expected count is known.
//!
//! ```text
//! AwaitingExpectedCount --TOTAL_SECTIONS:n--> Collecting --|received| >= n--> Complete
//!          \______________________TOTAL_SECTIONS:0 or backlog already complete___/
//! ```
//!
//! `Complete` is terminal: later messages are ignored.

use super::report::{CorpusReport, SentimentSummary};
use super::tally::WordTally;
use crate::codec::types::{ResultMessage, SectionId, SectionResult, SentimentLabel};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingExpectedCount,
    Collecting,
    Complete,
}

/// What applying one message did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// The expected count was set.
    CountSet(usize),
    /// A second announcement was dropped; the first one stands.
    CountIgnored { announced: usize, kept: usize },
    /// A result was stored. `replaced` is true if the id had been seen before.
    Recorded { section_id: SectionId, replaced: bool },
    /// The corpus was already complete.
    IgnoredAfterCompletion,
}

#[derive(Debug, Clone)]
struct RankedSentence {
    length: usize,
    section_id: SectionId,
    text: String,
}

/// Accumulated results of one run.
#[derive(Debug, Clone)]
pub struct CorpusState {
    expected_count: Option<usize>,
    /// Section id -> result. Ordered by id.
    received: BTreeMap<SectionId, SectionResult>,
    total_words: usize,
    /// Longest first; equal lengths in insertion order.
    sentence_ranking: Vec<RankedSentence>,
    phase: Phase,
}

impl Default for CorpusState {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusState {
    pub fn new() -> Self {
        Self {
            expected_count: None,
            received: BTreeMap::new(),
            total_words: 0,
            sentence_ranking: Vec::new(),
            phase: Phase::AwaitingExpectedCount,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn expected_count(&self) -> Option<usize> {
        self.expected_count
    }

    pub fn received_count(&self) -> usize {
        self.received.len()
    }

    pub fn total_words(&self) -> usize {
        self.total_words
    }

    pub fn apply(&mut self, message: ResultMessage) -> Applied {
        match message {
            ResultMessage::SectionCount(total) => self.set_expected_count(total),
            ResultMessage::Section(result) => self.record(result),
        }
    }

    /// Sets the expected section count. Only the first announcement counts.
    pub fn set_expected_count(&mut self, total: usize) -> Applied {
        if let Some(kept) = self.expected_count {
            return Applied::CountIgnored {
                announced: total,
                kept,
            };
        }

        self.expected_count = Some(total);
        self.refresh_phase();
        Applied::CountSet(total)
    }

    /// Stores a section result. A repeated id replaces the earlier result,
    /// including its word total and sentences.
    pub fn record(&mut self, result: SectionResult) -> Applied {
        if self.is_complete() {
            return Applied::IgnoredAfterCompletion;
        }

        let section_id = result.section_id;
        let replaced = match self.received.remove(&section_id) {
            Some(previous) => {
                self.total_words -= previous.word_count;
                self.sentence_ranking
                    .retain(|sentence| sentence.section_id != section_id);
                true
            }
            None => false,
        };

        self.total_words += result.word_count;
        for sentence in &result.ranked_sentences {
            self.insert_sentence(section_id, sentence);
        }
        self.received.insert(section_id, result);

        self.refresh_phase();
        Applied::Recorded {
            section_id,
            replaced,
        }
    }

    fn insert_sentence(&mut self, section_id: SectionId, text: &str) {
        let length = text.chars().count();
        let at = self
            .sentence_ranking
            .partition_point(|existing| existing.length >= length);

        self.sentence_ranking.insert(
            at,
            RankedSentence {
                length,
                section_id,
                text: text.to_string(),
            },
        );
    }

    fn refresh_phase(&mut self) {
        if self.phase == Phase::Complete {
            return;
        }

        self.phase = match self.expected_count {
            None => Phase::AwaitingExpectedCount,
            Some(expected) if self.received.len() >= expected => Phase::Complete,
            Some(_) => Phase::Collecting,
        };
    }

    /// Sums every received section's top words.
    pub fn word_tally(&self) -> WordTally {
        WordTally::from_results(self.received.values())
    }

    /// The `n` most frequent words across all received sections.
    pub fn global_top_words(&self, n: usize) -> Vec<(String, usize)> {
        self.word_tally().top(n)
    }

    pub fn sentiment_summary(&self) -> SentimentSummary {
        let mut summary = SentimentSummary::default();
        if self.received.is_empty() {
            return summary;
        }

        let mut total_score = 0.0;
        for result in self.received.values() {
            total_score += result.sentiment_score;
            match result.sentiment_label {
                SentimentLabel::Positive => summary.positive += 1,
                SentimentLabel::Negative => summary.negative += 1,
                SentimentLabel::Neutral => summary.neutral += 1,
            }
        }

        summary.average = total_score / self.received.len() as f64;
        summary
    }

    /// All sentences received so far, longest first.
    pub fn ranked_sentences(&self) -> impl Iterator<Item = &str> {
        self.sentence_ranking
            .iter()
            .map(|sentence| sentence.text.as_str())
    }

    /// Consumes the state and builds the final report.
    pub fn finish(self, top_n: usize) -> CorpusReport {
        let top_words = self.global_top_words(top_n);
        let sentiment = self.sentiment_summary();

        CorpusReport {
            sections_processed: self.received.len(),
            total_words: self.total_words,
            sentiment,
            top_n,
            top_words,
            ranked_sentences: self
                .sentence_ranking
                .into_iter()
                .map(|sentence| sentence.text)
                .collect(),
            redacted_texts: self
                .received
                .into_values()
                .map(|result| result.redacted_text)
                .collect(),
        }
    }
}
