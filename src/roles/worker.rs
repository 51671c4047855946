//! Worker Pool
//!
//! Stateless analysis workers. Each worker loop pulls one task at a time from
//! the task queue, analyzes it to completion and publishes the result before
//! pulling the next one. Any number of loops (and processes) may share a queue.
//!
//! ## Failure Policy
//! - **Malformed task**: logged and dropped; the loop continues.
//! - **Queue failure**: fatal for the loop, returned through its `JoinSet` entry.

use crate::analyzer::TextAnalyzer;
use crate::codec::MessageCodec;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::queue::QueueService;

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Outcome of one poll of the task queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// A task was analyzed and its result published.
    Processed,
    /// A message was received but could not be decoded.
    Dropped,
    /// The receive call timed out.
    Idle,
}

pub struct WorkerPool {
    queue: Arc<dyn QueueService>,
    analyzer: Arc<TextAnalyzer>,
    codec: MessageCodec,
    task_queue: String,
    result_queue: String,
    poll_timeout: Duration,
    /// Number of concurrent worker loops.
    worker_count: usize,
}

impl WorkerPool {
    pub fn new(
        queue: Arc<dyn QueueService>,
        analyzer: TextAnalyzer,
        config: &PipelineConfig,
    ) -> Arc<Self> {
        Arc::new(Self {
            queue,
            analyzer: Arc::new(analyzer),
            codec: MessageCodec::new(config.wire_format),
            task_queue: config.task_queue.clone(),
            result_queue: config.result_queue.clone(),
            poll_timeout: config.poll_timeout,
            worker_count: config.workers,
        })
    }

    /// Declares both queues and spawns the worker loops.
    ///
    /// Loops run until they hit a fatal error or the set is aborted.
    pub async fn start(self: Arc<Self>) -> Result<JoinSet<Result<()>>> {
        self.queue.declare(&self.task_queue).await?;
        self.queue.declare(&self.result_queue).await?;

        tracing::info!(
            "Starting {} workers (top {} words)",
            self.worker_count,
            self.analyzer.top_k()
        );

        let mut workers = JoinSet::new();
        for worker_id in 0..self.worker_count {
            let pool = self.clone();
            workers.spawn(async move { pool.worker_loop(worker_id).await });
        }

        Ok(workers)
    }

    async fn worker_loop(&self, worker_id: usize) -> Result<()> {
        tracing::info!("Worker {} started", worker_id);

        loop {
            if let Err(e) = self.poll_once(worker_id).await {
                tracing::error!("Worker {} stopping: {}", worker_id, e);
                return Err(e);
            }
        }
    }

    /// Receives at most one task and handles it.
    pub async fn poll_once(&self, worker_id: usize) -> Result<Poll> {
        let Some(payload) = self
            .queue
            .receive(&self.task_queue, self.poll_timeout)
            .await?
        else {
            tracing::trace!("Worker {} idle", worker_id);
            return Ok(Poll::Idle);
        };

        let section = match self.codec.decode_task(&payload) {
            Ok(section) => section,
            Err(e) => {
                tracing::warn!("Worker {} dropped task: {}", worker_id, e);
                return Ok(Poll::Dropped);
            }
        };

        let result = self.analyzer.analyze(&section);
        let encoded = self.codec.encode_result(&result)?;
        self.queue.publish(&self.result_queue, encoded).await?;

        tracing::info!(
            "Worker {} processed section {} ({} words, sentiment {}:{})",
            worker_id,
            result.section_id,
            result.word_count,
            result.sentiment_label,
            result.sentiment_score
        );

        Ok(Poll::Processed)
    }
}
