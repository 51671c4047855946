//! Producer Role
//!
//! Runs once per document: splits it into sections, publishes one task per
//! section, then announces the section count on the result queue.

use crate::codec::MessageCodec;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::queue::QueueService;
use crate::sectionizer;

use std::path::Path;
use std::sync::Arc;

pub struct Producer {
    queue: Arc<dyn QueueService>,
    codec: MessageCodec,
    task_queue: String,
    result_queue: String,
}

impl Producer {
    pub fn new(queue: Arc<dyn QueueService>, config: &PipelineConfig) -> Self {
        Self {
            queue,
            codec: MessageCodec::new(config.wire_format),
            task_queue: config.task_queue.clone(),
            result_queue: config.result_queue.clone(),
        }
    }

    /// Reads a source file and publishes it.
    pub async fn publish_file(&self, path: &Path, sentences_per_section: usize) -> Result<usize> {
        let text = tokio::fs::read_to_string(path).await?;
        tracing::info!("Read {} bytes from {}", text.len(), path.display());
        self.publish_document(&text, sentences_per_section).await
    }

    /// Publishes every section of `text`, then the section count.
    ///
    /// # Returns
    /// The number of sections published.
    pub async fn publish_document(&self, text: &str, sentences_per_section: usize) -> Result<usize> {
        let sections = sectionizer::split(text, sentences_per_section)?;

        self.queue.declare(&self.task_queue).await?;
        self.queue.declare(&self.result_queue).await?;

        let total = sections.len();
        for (sent, section) in sections.iter().enumerate() {
            let payload = self.codec.encode_task(section)?;
            self.queue.publish(&self.task_queue, payload).await?;
            tracing::info!("Sent {}/{} sections", sent + 1, total);
        }

        let announcement = self.codec.encode_section_count(total)?;
        self.queue.publish(&self.result_queue, announcement).await?;
        tracing::info!("Sent total sections count: {}", total);

        Ok(total)
    }
}
