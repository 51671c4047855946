//! Text Analyzer Module
//!
//! Runs the per-section analyses on a worker. Every analysis is pure: no state
//! is kept between sections, so any number of workers can share one analyzer.
//!
//! ## Analyses
//! - **Word count**: whitespace tokens, lightly trimmed of edge punctuation.
//! - **Top-K words**: most frequent normalized (lower-case, letters only) words.
//! - **Sentiment**: lexicon lookup over normalized words, labelled with a ±0.1 threshold.
//! - **Name redaction**: capitalized words replaced by a placeholder.
//! - **Sentence ranking**: sentences ordered longest first.
//!
//! ## Submodules
//! - **`lexicon`**: the injectable positive/negative word sets.
//! - **`text`**: the analysis functions themselves.

pub mod lexicon;
pub mod text;

pub use lexicon::SentimentLexicon;

use crate::codec::types::{Section, SectionResult};
use crate::error::{PipelineError, Result};
use text::NameRedactor;

/// Analyzer configured once at worker startup.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    /// Number of top words reported per section.
    top_k: usize,
    lexicon: SentimentLexicon,
    redactor: NameRedactor,
}

impl TextAnalyzer {
    /// Creates an analyzer reporting `top_k` words per section.
    ///
    /// # Errors
    /// Returns `PipelineError::Config` if `top_k` is zero.
    pub fn new(top_k: usize, lexicon: SentimentLexicon) -> Result<Self> {
        if top_k == 0 {
            return Err(PipelineError::Config(
                "top word count must be a positive integer".to_string(),
            ));
        }

        Ok(Self {
            top_k,
            lexicon,
            redactor: NameRedactor::new(text::DEFAULT_PLACEHOLDER)?,
        })
    }

    /// Replaces the redaction placeholder.
    pub fn with_placeholder(mut self, placeholder: &str) -> Result<Self> {
        self.redactor = NameRedactor::new(placeholder)?;
        Ok(self)
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Runs every analysis over one section.
    pub fn analyze(&self, section: &Section) -> SectionResult {
        let (sentiment_label, sentiment_score) =
            text::score_sentiment(&section.text, &self.lexicon);

        SectionResult {
            section_id: section.id,
            word_count: text::count_words(&section.text),
            top_words: text::top_words(&section.text, self.top_k),
            sentiment_label,
            sentiment_score,
            redacted_text: self.redactor.redact(&section.text),
            ranked_sentences: text::rank_sentences(&section.text),
        }
    }
}

#[cfg(test)]
mod tests;
