//! Pipe-Delimited Text Protocol
//!
//! The original wire format shared by all roles:
//!
//! ```text
//! SECTION_<id>|<text>
//! TOTAL_SECTIONS:<n>
//! SECTION_<id>|words:<n>|top:<w>:<c>;...|sentiment:<label>:<score>|names_replaced:<len>|processed_text:<text>|sorted:<s1>~<s2>
//! ```
//!
//! Delimiters are not escaped. A `|` inside `processed_text` cuts the field short
//! and a `~` inside a sentence splits it in two. Task text is the exception: it is
//! everything after the first `|`, so it survives intact.

use super::types::{ResultMessage, Section, SectionId, SectionResult, SentimentLabel};
use crate::error::{PipelineError, Result};

pub const SECTION_PREFIX: &str = "SECTION_";
pub const SECTION_COUNT_PREFIX: &str = "TOTAL_SECTIONS:";

const FIELD_WORDS: &str = "words:";
const FIELD_TOP: &str = "top:";
const FIELD_SENTIMENT: &str = "sentiment:";
const FIELD_NAMES_REPLACED: &str = "names_replaced:";
const FIELD_PROCESSED_TEXT: &str = "processed_text:";
const FIELD_SORTED: &str = "sorted:";

pub fn encode_task(section: &Section) -> String {
    format!("{}{}|{}", SECTION_PREFIX, section.id, section.text)
}

pub fn encode_section_count(total: usize) -> String {
    format!("{}{}", SECTION_COUNT_PREFIX, total)
}

pub fn encode_result(result: &SectionResult) -> String {
    let top = result
        .top_words
        .iter()
        .map(|(word, count)| format!("{}:{}", word, count))
        .collect::<Vec<_>>()
        .join(";");

    format!(
        "{}{}|{}{}|{}{}|{}{}:{}|{}{}|{}{}|{}{}",
        SECTION_PREFIX,
        result.section_id,
        FIELD_WORDS,
        result.word_count,
        FIELD_TOP,
        top,
        FIELD_SENTIMENT,
        result.sentiment_label,
        result.sentiment_score,
        FIELD_NAMES_REPLACED,
        result.redacted_text.len(),
        FIELD_PROCESSED_TEXT,
        result.redacted_text,
        FIELD_SORTED,
        result.ranked_sentences.join("~"),
    )
}

pub fn decode_task(message: &str) -> Result<Section> {
    let (head, text) = message
        .split_once('|')
        .ok_or_else(|| PipelineError::malformed("task message has no '|' separator"))?;

    Ok(Section::new(parse_section_id(head)?, text))
}

/// Decodes either a section-count announcement or a section result.
pub fn decode_result_message(message: &str) -> Result<ResultMessage> {
    if let Some(total) = message.strip_prefix(SECTION_COUNT_PREFIX) {
        let total = parse_number(total, "TOTAL_SECTIONS")?;
        return Ok(ResultMessage::SectionCount(total));
    }

    decode_result(message).map(ResultMessage::Section)
}

/// Decodes a section result. Fields after the id may come in any order;
/// unknown prefixes are skipped.
pub fn decode_result(message: &str) -> Result<SectionResult> {
    let mut fields = message.split('|');
    let section_id = parse_section_id(fields.next().unwrap_or_default())?;

    let mut word_count = None;
    let mut top_words = Vec::new();
    let mut sentiment = (SentimentLabel::Neutral, 0.0);
    let mut redacted_text = String::new();
    let mut ranked_sentences = Vec::new();

    for field in fields {
        if let Some(value) = field.strip_prefix(FIELD_WORDS) {
            word_count = Some(parse_number(value, "words")?);
        } else if let Some(value) = field.strip_prefix(FIELD_TOP) {
            top_words = decode_top_words(value)?;
        } else if let Some(value) = field.strip_prefix(FIELD_SENTIMENT) {
            sentiment = decode_sentiment(value)?;
        } else if let Some(value) = field.strip_prefix(FIELD_PROCESSED_TEXT) {
            redacted_text = value.to_string();
        } else if let Some(value) = field.strip_prefix(FIELD_SORTED) {
            ranked_sentences = value
                .split('~')
                .filter(|sentence| !sentence.is_empty())
                .map(str::to_string)
                .collect();
        } else {
            // names_replaced is derived from processed_text; anything else is newer than us.
            tracing::trace!("Skipping field '{}' in result for section {}", field, section_id);
        }
    }

    let word_count = word_count
        .ok_or_else(|| PipelineError::malformed(format!("section {} has no words field", section_id)))?;

    Ok(SectionResult {
        section_id,
        word_count,
        top_words,
        sentiment_label: sentiment.0,
        sentiment_score: sentiment.1,
        redacted_text,
        ranked_sentences,
    })
}

fn parse_section_id(field: &str) -> Result<SectionId> {
    let digits = field.strip_prefix(SECTION_PREFIX).unwrap_or(field);
    digits
        .trim()
        .parse()
        .map_err(|_| PipelineError::malformed(format!("invalid section id '{}'", field)))
}

fn parse_number(value: &str, field: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| PipelineError::malformed(format!("invalid {} value '{}'", field, value)))
}

fn decode_top_words(value: &str) -> Result<Vec<(String, usize)>> {
    value
        .split(';')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (word, count) = pair
                .split_once(':')
                .ok_or_else(|| PipelineError::malformed(format!("invalid top word '{}'", pair)))?;
            Ok((word.to_string(), parse_number(count, "top word count")?))
        })
        .collect()
}

fn decode_sentiment(value: &str) -> Result<(SentimentLabel, f64)> {
    let (label, score) = value
        .split_once(':')
        .ok_or_else(|| PipelineError::malformed(format!("invalid sentiment '{}'", value)))?;

    let label = label.parse().map_err(PipelineError::MalformedMessage)?;
    let score = score
        .trim()
        .parse()
        .map_err(|_| PipelineError::malformed(format!("invalid sentiment score '{}'", score)))?;

    Ok((label, score))
}
