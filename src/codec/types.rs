//! Wire Data Types
//!
//! The records exchanged between the producer, the workers and the aggregator.
//! All of them are immutable once created: a `Section` is consumed by exactly one
//! worker, a `SectionResult` by the aggregator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal identifier of a section within one document.
pub type SectionId = u64;

/// A contiguous slice of the source document, the unit of distributed work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub text: String,
}

impl Section {
    pub fn new(id: SectionId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Polarity bucket of a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            other => Err(format!("unknown sentiment label '{}'", other)),
        }
    }
}

/// Per-section analysis output produced by a worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionResult {
    pub section_id: SectionId,
    pub word_count: usize,
    /// Count-descending; ties keep first-seen order.
    pub top_words: Vec<(String, usize)>,
    pub sentiment_label: SentimentLabel,
    /// In `[-1, 1]`.
    pub sentiment_score: f64,
    pub redacted_text: String,
    /// Longest first; equal lengths keep their order of appearance.
    pub ranked_sentences: Vec<String>,
}

/// Everything that travels on the result queue.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultMessage {
    /// `TOTAL_SECTIONS:<n>` announcement from the producer.
    SectionCount(usize),
    /// Analysis of one section from a worker.
    Section(SectionResult),
}

/// Message encodings understood by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireFormat {
    /// One tagged JSON record per message.
    #[default]
    Tagged,
    /// The original pipe-delimited text protocol. Field contents are not escaped.
    Delimited,
}

impl FromStr for WireFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tagged" | "json" => Ok(WireFormat::Tagged),
            "delimited" | "legacy" => Ok(WireFormat::Delimited),
            other => Err(format!(
                "unknown wire format '{}' (expected 'tagged' or 'delimited')",
                other
            )),
        }
    }
}
