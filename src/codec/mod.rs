//! Section Codec Module
//!
//! Encodes and decodes every message that crosses a queue.
//!
//! ## Message Kinds
//! - **Task** (task queue): one `Section` for a worker to analyze.
//! - **Section count** (result queue): the producer's announcement of how many sections exist.
//! - **Result** (result queue): one `SectionResult` for the aggregator.
//!
//! ## Formats
//! - **`tagged`**: JSON records with a `kind` discriminator. Unambiguous for any content.
//! - **`delimited`**: the original `|`/`:`/`;`/`~` text protocol, kept for interop.
//!
//! Encoding uses the format the codec was built with. Decoding detects the format
//! per message, so roles configured differently can still talk to each other.

pub mod delimited;
pub mod tagged;
pub mod types;

pub use types::{ResultMessage, Section, SectionId, SectionResult, SentimentLabel, WireFormat};

use crate::error::{PipelineError, Result};

/// Format-aware encoder and format-sniffing decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageCodec {
    format: WireFormat,
}

impl MessageCodec {
    pub fn new(format: WireFormat) -> Self {
        Self { format }
    }

    pub fn encode_task(&self, section: &Section) -> Result<Vec<u8>> {
        let message = match self.format {
            WireFormat::Tagged => tagged::encode_task(section)?,
            WireFormat::Delimited => delimited::encode_task(section),
        };
        Ok(message.into_bytes())
    }

    pub fn encode_section_count(&self, total: usize) -> Result<Vec<u8>> {
        let message = match self.format {
            WireFormat::Tagged => tagged::encode_section_count(total)?,
            WireFormat::Delimited => delimited::encode_section_count(total),
        };
        Ok(message.into_bytes())
    }

    pub fn encode_result(&self, result: &SectionResult) -> Result<Vec<u8>> {
        let message = match self.format {
            WireFormat::Tagged => tagged::encode_result(result)?,
            WireFormat::Delimited => delimited::encode_result(result),
        };
        Ok(message.into_bytes())
    }

    pub fn decode_task(&self, payload: &[u8]) -> Result<Section> {
        let message = as_text(payload)?;
        match detect_format(message) {
            WireFormat::Tagged => tagged::decode_task(message),
            WireFormat::Delimited => delimited::decode_task(message),
        }
    }

    pub fn decode_result_message(&self, payload: &[u8]) -> Result<ResultMessage> {
        let message = as_text(payload)?;
        match detect_format(message) {
            WireFormat::Tagged => tagged::decode_result_message(message),
            WireFormat::Delimited => delimited::decode_result_message(message),
        }
    }
}

fn as_text(payload: &[u8]) -> Result<&str> {
    std::str::from_utf8(payload)
        .map_err(|e| PipelineError::malformed(format!("payload is not UTF-8: {}", e)))
}

/// Tagged records are JSON objects; the text protocol never starts with `{`.
fn detect_format(message: &str) -> WireFormat {
    if message.trim_start().starts_with('{') {
        WireFormat::Tagged
    } else {
        WireFormat::Delimited
    }
}
