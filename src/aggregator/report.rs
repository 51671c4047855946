//! Corpus Reports
//!
//! The three artifacts written once the corpus is complete:
//!
//! - `report.txt`: totals, the aggregated sentiment line and the global top words.
//! - `sorted_text.txt`: every sentence of the corpus, longest first, one per line.
//! - `processed_text.txt`: each section's redacted text, one per line, in section order.

use crate::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};

pub const SUMMARY_FILE: &str = "report.txt";
pub const SENTENCE_RANKING_FILE: &str = "sorted_text.txt";
pub const REDACTED_TEXT_FILE: &str = "processed_text.txt";

/// Corpus-level sentiment: mean section score and sections per label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentSummary {
    pub average: f64,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl fmt::Display for SentimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average: {:.4} (Positive: {}, Negative: {}, Neutral: {})",
            self.average, self.positive, self.negative, self.neutral
        )
    }
}

/// Final, immutable view of a completed corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusReport {
    pub sections_processed: usize,
    pub total_words: usize,
    pub sentiment: SentimentSummary,
    /// Requested size of the top-word list (the list itself may be shorter).
    pub top_n: usize,
    pub top_words: Vec<(String, usize)>,
    pub ranked_sentences: Vec<String>,
    pub redacted_texts: Vec<String>,
}

impl CorpusReport {
    pub fn render_summary(&self) -> String {
        let mut out = format!(
            "Sections processed: {}\nWord count: {}\nSentiment result: {}\n\nTop {} words\n",
            self.sections_processed, self.total_words, self.sentiment, self.top_n
        );
        for (word, count) in &self.top_words {
            out.push_str(&format!("{}: {}\n", word, count));
        }
        out
    }

    pub fn render_sentence_ranking(&self) -> String {
        lines(&self.ranked_sentences)
    }

    pub fn render_redacted_text(&self) -> String {
        lines(&self.redacted_texts)
    }
}

fn lines(items: &[String]) -> String {
    items.iter().map(|item| format!("{}\n", item)).collect()
}

/// Locations of the written report files.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub summary: PathBuf,
    pub sentence_ranking: PathBuf,
    pub redacted_text: PathBuf,
}

/// Writes reports into one output directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes all three files, creating the output directory if needed.
    pub async fn write(&self, report: &CorpusReport) -> Result<ReportPaths> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let paths = ReportPaths {
            summary: self.output_dir.join(SUMMARY_FILE),
            sentence_ranking: self.output_dir.join(SENTENCE_RANKING_FILE),
            redacted_text: self.output_dir.join(REDACTED_TEXT_FILE),
        };

        tokio::fs::write(&paths.summary, report.render_summary()).await?;
        tokio::fs::write(&paths.sentence_ranking, report.render_sentence_ranking()).await?;
        tokio::fs::write(&paths.redacted_text, report.render_redacted_text()).await?;

        tracing::info!("Reports written to {}", self.output_dir.display());
        Ok(paths)
    }
}
