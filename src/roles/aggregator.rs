//! Aggregator Role
//!
//! Single instance, single task. Pulls messages off the result queue, feeds
//! them into the `CorpusState` and stops exactly when the corpus is complete.
//! There is no overall timeout: if the count announcement or a result never
//! arrives, collection never ends.

use crate::aggregator::{Applied, CorpusReport, CorpusState, ReportWriter};
use crate::codec::MessageCodec;
use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::queue::QueueService;

use std::sync::Arc;
use std::time::Duration;

pub struct Aggregator {
    queue: Arc<dyn QueueService>,
    codec: MessageCodec,
    result_queue: String,
    poll_timeout: Duration,
    /// Size of the global top-word list.
    top_n: usize,
    state: CorpusState,
}

impl Aggregator {
    /// # Errors
    /// Returns `PipelineError::Config` if `top_n` is zero.
    pub fn new(queue: Arc<dyn QueueService>, top_n: usize, config: &PipelineConfig) -> Result<Self> {
        if top_n == 0 {
            return Err(PipelineError::Config(
                "top word count must be a positive integer".to_string(),
            ));
        }

        Ok(Self {
            queue,
            codec: MessageCodec::new(config.wire_format),
            result_queue: config.result_queue.clone(),
            poll_timeout: config.poll_timeout,
            top_n,
            state: CorpusState::new(),
        })
    }

    pub fn state(&self) -> &CorpusState {
        &self.state
    }

    /// Applies one raw delivery. Malformed messages are logged and dropped.
    ///
    /// # Returns
    /// Whether the corpus is complete.
    pub fn handle_message(&mut self, payload: &[u8]) -> bool {
        let message = match self.codec.decode_result_message(payload) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("Dropping result message: {}", e);
                return self.state.is_complete();
            }
        };

        match self.state.apply(message) {
            Applied::CountSet(total) => {
                tracing::info!("Expecting {} sections total", total);
            }
            Applied::CountIgnored { announced, kept } => {
                tracing::warn!(
                    "Ignoring section count {}; already expecting {}",
                    announced,
                    kept
                );
            }
            Applied::Recorded {
                section_id,
                replaced,
            } => {
                if replaced {
                    tracing::warn!("Section {} received again; keeping the latest", section_id);
                }
                tracing::info!(
                    "Aggregated result for section {} ({}/{})",
                    section_id,
                    self.state.received_count(),
                    self.state
                        .expected_count()
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "?".to_string())
                );
            }
            Applied::IgnoredAfterCompletion => {
                tracing::debug!("Corpus already complete; ignoring message");
            }
        }

        self.state.is_complete()
    }

    /// Collects until complete and returns the corpus report.
    pub async fn collect(mut self) -> Result<CorpusReport> {
        self.queue.declare(&self.result_queue).await?;
        tracing::info!("Collecting results from '{}'", self.result_queue);

        while !self.state.is_complete() {
            match self
                .queue
                .receive(&self.result_queue, self.poll_timeout)
                .await?
            {
                Some(payload) => {
                    self.handle_message(&payload);
                }
                None => {
                    tracing::debug!(
                        "No results for {:?} ({} received so far)",
                        self.poll_timeout,
                        self.state.received_count()
                    );
                }
            }
        }

        tracing::info!("All results received! Generating reports...");
        Ok(self.state.finish(self.top_n))
    }

    /// Collects, then writes the three report files.
    pub async fn run(self, writer: &ReportWriter) -> Result<CorpusReport> {
        let report = self.collect().await?;
        writer.write(&report).await?;
        Ok(report)
    }
}
