//! Single-process runner: producer, worker pool and aggregator wired to one
//! in-memory queue.

use super::{Aggregator, Producer, WorkerPool};
use crate::aggregator::CorpusReport;
use crate::analyzer::{SentimentLexicon, TextAnalyzer};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::queue::{MemoryQueue, QueueService};

use std::sync::Arc;

/// Runs the whole pipeline over `text` and returns the corpus report.
///
/// `top_k` sets both the per-section and the global top-word list size.
pub async fn run_local(
    text: &str,
    sentences_per_section: usize,
    top_k: usize,
    config: &PipelineConfig,
) -> Result<CorpusReport> {
    let queue: Arc<dyn QueueService> = MemoryQueue::new();

    let analyzer = TextAnalyzer::new(top_k, SentimentLexicon::default())?;
    let aggregator = Aggregator::new(queue.clone(), top_k, config)?;
    let producer = Producer::new(queue.clone(), config);
    let mut workers = WorkerPool::new(queue.clone(), analyzer, config)
        .start()
        .await?;

    let outcome = tokio::try_join!(
        producer.publish_document(text, sentences_per_section),
        aggregator.collect()
    );
    workers.abort_all();

    let (published, report) = outcome?;
    tracing::info!(
        "Local run finished: {} sections published, {} aggregated",
        published,
        report.sections_processed
    );
    Ok(report)
}
