//! Runtime configuration shared by all roles.

use crate::codec::types::WireFormat;
use crate::error::{PipelineError, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_QUEUE_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_TASK_QUEUE: &str = "task_queue";
pub const DEFAULT_RESULT_QUEUE: &str = "result_queue";
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(5000);

/// Settings every role reads at startup.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Queue service location.
    pub queue_url: String,
    pub task_queue: String,
    pub result_queue: String,
    /// How long one receive call may block before the role polls again.
    pub poll_timeout: Duration,
    /// Format used when encoding. Decoding accepts every format.
    pub wire_format: WireFormat,
    /// Directory the aggregator writes its reports into.
    pub output_dir: PathBuf,
    /// Concurrent worker loops in one worker process.
    pub workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            queue_url: DEFAULT_QUEUE_URL.to_string(),
            task_queue: DEFAULT_TASK_QUEUE.to_string(),
            result_queue: DEFAULT_RESULT_QUEUE.to_string(),
            poll_timeout: DEFAULT_POLL_TIMEOUT,
            wire_format: WireFormat::default(),
            output_dir: PathBuf::from("."),
            workers: 1,
        }
    }
}

impl PipelineConfig {
    /// Rejects settings no role can run with.
    pub fn validate(&self) -> Result<()> {
        if self.task_queue.trim().is_empty() || self.result_queue.trim().is_empty() {
            return Err(PipelineError::Config("queue names must not be empty".to_string()));
        }
        if self.task_queue == self.result_queue {
            return Err(PipelineError::Config(format!(
                "task and result queues must differ (both are '{}')",
                self.task_queue
            )));
        }
        if self.poll_timeout.is_zero() {
            return Err(PipelineError::Config(
                "poll timeout must be greater than zero".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(PipelineError::Config(
                "worker count must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parses a count argument that must be at least 1.
pub fn positive_count(value: i64, name: &str) -> Result<usize> {
    if value <= 0 {
        return Err(PipelineError::Config(format!(
            "{} must be a positive integer, got {}",
            name, value
        )));
    }
    usize::try_from(value)
        .map_err(|_| PipelineError::Config(format!("{} is too large: {}", name, value)))
}
