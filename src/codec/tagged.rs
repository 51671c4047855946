//! Tagged JSON Records
//!
//! Each message is a single JSON object whose `kind` field names the record:
//!
//! ```text
//! {"kind":"task","id":3,"text":"..."}
//! {"kind":"section_count","total":12}
//! {"kind":"result","section_id":3,"word_count":41,...}
//! ```
//!
//! String escaping is handled by the serializer, so section text may contain
//! any character, including the delimiters of the text protocol.

use super::types::{ResultMessage, Section, SectionResult};
use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Envelope {
    Task(Section),
    SectionCount { total: usize },
    Result(SectionResult),
}

fn to_json(envelope: &Envelope) -> Result<String> {
    Ok(serde_json::to_string(envelope)?)
}

fn from_json(message: &str) -> Result<Envelope> {
    serde_json::from_str(message).map_err(|e| PipelineError::malformed(e.to_string()))
}

pub fn encode_task(section: &Section) -> Result<String> {
    to_json(&Envelope::Task(section.clone()))
}

pub fn encode_section_count(total: usize) -> Result<String> {
    to_json(&Envelope::SectionCount { total })
}

pub fn encode_result(result: &SectionResult) -> Result<String> {
    to_json(&Envelope::Result(result.clone()))
}

pub fn decode_task(message: &str) -> Result<Section> {
    match from_json(message)? {
        Envelope::Task(section) => Ok(section),
        _ => Err(PipelineError::malformed("expected a task record")),
    }
}

pub fn decode_result_message(message: &str) -> Result<ResultMessage> {
    match from_json(message)? {
        Envelope::SectionCount { total } => Ok(ResultMessage::SectionCount(total)),
        Envelope::Result(result) => Ok(ResultMessage::Section(result)),
        Envelope::Task(_) => Err(PipelineError::malformed(
            "task record found on the result queue",
        )),
    }
}
