//! Sentence scanning and section grouping.

use crate::codec::types::Section;
use crate::error::{PipelineError, Result};

/// Characters that close a sentence. The terminator stays part of the sentence.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

fn is_padding(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Iterator over the terminator-bounded sentences of a text.
///
/// Each sentence is trimmed of surrounding spaces, tabs and line breaks.
/// A trailing fragment without closing punctuation is never yielded.
pub struct Sentences<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let end = self.rest.find(TERMINATORS)?;
        // Terminators are single-byte, so `end + 1` is a char boundary.
        let (candidate, rest) = self.rest.split_at(end + 1);
        self.rest = rest;
        Some(candidate.trim_matches(is_padding))
    }
}

/// Scans `text` into sentences.
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences { rest: text }
}

/// Joins all non-empty lines into one logical text, separating lines with a
/// single space unless the text so far already ends in whitespace.
fn join_lines(text: &str) -> String {
    let mut joined = String::with_capacity(text.len());

    for line in text.lines().filter(|line| !line.is_empty()) {
        if joined.ends_with(|c: char| !c.is_whitespace()) {
            joined.push(' ');
        }
        joined.push_str(line);
    }

    joined
}

/// Splits a document into sections of `sentences_per_section` sentences.
///
/// Section ids are assigned in order starting at 0. Every sentence is stored
/// followed by a single space. The last section may be short.
///
/// # Errors
/// Returns `PipelineError::Config` if `sentences_per_section` is zero.
pub fn split(text: &str, sentences_per_section: usize) -> Result<Vec<Section>> {
    if sentences_per_section == 0 {
        return Err(PipelineError::Config(
            "sentences per section must be a positive integer".to_string(),
        ));
    }

    let joined = join_lines(text);
    let mut sections = Vec::new();
    let mut buffer = String::new();
    let mut sentence_count = 0usize;

    for sentence in sentences(&joined) {
        buffer.push_str(sentence);
        buffer.push(' ');
        sentence_count += 1;

        if sentence_count == sentences_per_section {
            let id = sections.len() as u64;
            sections.push(Section::new(id, std::mem::take(&mut buffer)));
            sentence_count = 0;
        }
    }

    if !buffer.is_empty() {
        let id = sections.len() as u64;
        sections.push(Section::new(id, buffer));
    }

    tracing::debug!(
        "Split {} bytes into {} sections ({} sentences each)",
        text.len(),
        sections.len(),
        sentences_per_section
    );

    Ok(sections)
}
