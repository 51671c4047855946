//! Command-line interface: one subcommand per role.

use crate::aggregator::ReportWriter;
use crate::analyzer::{SentimentLexicon, TextAnalyzer};
use crate::codec::types::WireFormat;
use crate::config::{
    positive_count, PipelineConfig, DEFAULT_QUEUE_URL, DEFAULT_RESULT_QUEUE, DEFAULT_TASK_QUEUE,
};
use crate::queue::{QueueService, RedisQueue};
use crate::roles::{run_local, Aggregator, Producer, WorkerPool};

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Distributed text-analytics pipeline.
#[derive(Parser, Debug)]
#[command(name = "text-pipeline")]
#[command(about = "Split a document into sections, analyze them in parallel, aggregate a report")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a document and publish its sections.
    Producer {
        /// Source text file.
        file: PathBuf,
        /// Sentences per section.
        #[arg(allow_negative_numbers = true)]
        sentences_per_section: i64,
    },

    /// Analyze sections from the task queue until interrupted.
    Worker {
        /// Top words reported per section.
        #[arg(allow_negative_numbers = true)]
        top_words: i64,
    },

    /// Collect results and write the reports once every section is in.
    Aggregator {
        /// Size of the global top-word list.
        #[arg(allow_negative_numbers = true)]
        top_words: i64,
    },

    /// Run producer, workers and aggregator in this process over an in-memory queue.
    Local {
        file: PathBuf,
        #[arg(allow_negative_numbers = true)]
        sentences_per_section: i64,
        #[arg(allow_negative_numbers = true)]
        top_words: i64,
    },
}

/// Settings shared by every role.
#[derive(Args, Debug)]
pub struct PipelineArgs {
    /// Queue service URL.
    #[arg(long, env = "PIPELINE_QUEUE_URL", default_value = DEFAULT_QUEUE_URL, global = true)]
    pub queue_url: String,

    #[arg(long, env = "PIPELINE_TASK_QUEUE", default_value = DEFAULT_TASK_QUEUE, global = true)]
    pub task_queue: String,

    #[arg(long, env = "PIPELINE_RESULT_QUEUE", default_value = DEFAULT_RESULT_QUEUE, global = true)]
    pub result_queue: String,

    /// Milliseconds one receive call may block before polling again.
    #[arg(long, env = "PIPELINE_POLL_TIMEOUT_MS", default_value = "5000", global = true)]
    pub poll_timeout_ms: u64,

    /// Encoding for outgoing messages: `tagged` or `delimited`.
    #[arg(long, env = "PIPELINE_WIRE_FORMAT", default_value = "tagged", global = true)]
    pub wire_format: WireFormat,

    /// Directory for report.txt, sorted_text.txt and processed_text.txt.
    #[arg(long, env = "PIPELINE_OUTPUT_DIR", default_value = ".", global = true)]
    pub output_dir: PathBuf,

    /// Concurrent worker loops per worker process.
    #[arg(long, env = "PIPELINE_WORKERS", default_value = "1", global = true)]
    pub workers: usize,
}

impl PipelineArgs {
    pub fn into_config(self) -> PipelineConfig {
        PipelineConfig {
            queue_url: self.queue_url,
            task_queue: self.task_queue,
            result_queue: self.result_queue,
            poll_timeout: Duration::from_millis(self.poll_timeout_ms),
            wire_format: self.wire_format,
            output_dir: self.output_dir,
            workers: self.workers,
        }
    }
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

async fn connect(config: &PipelineConfig) -> crate::error::Result<Arc<dyn QueueService>> {
    let queue = RedisQueue::connect(&config.queue_url).await?;
    Ok(Arc::new(queue))
}

/// Runs the selected role to completion.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let config = cli.pipeline.into_config();
    config.validate()?;

    match cli.command {
        Command::Producer {
            file,
            sentences_per_section,
        } => {
            let sentences_per_section =
                positive_count(sentences_per_section, "sentences per section")?;
            let queue = connect(&config).await?;

            Producer::new(queue, &config)
                .publish_file(&file, sentences_per_section)
                .await?;
        }

        Command::Worker { top_words } => {
            let top_k = positive_count(top_words, "top word count")?;
            let analyzer = TextAnalyzer::new(top_k, SentimentLexicon::default())?;
            let queue = connect(&config).await?;
            let mut workers = WorkerPool::new(queue, analyzer, &config).start().await?;

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Interrupted, stopping workers");
                    workers.abort_all();
                }
                Some(joined) = workers.join_next() => {
                    workers.abort_all();
                    joined??;
                }
            }
        }

        Command::Aggregator { top_words } => {
            let top_n = positive_count(top_words, "top word count")?;
            let queue = connect(&config).await?;
            let writer = ReportWriter::new(&config.output_dir);

            let report = Aggregator::new(queue, top_n, &config)?.run(&writer).await?;
            tracing::info!(
                "Aggregated {} sections, {} words",
                report.sections_processed,
                report.total_words
            );
        }

        Command::Local {
            file,
            sentences_per_section,
            top_words,
        } => {
            let sentences_per_section =
                positive_count(sentences_per_section, "sentences per section")?;
            let top_k = positive_count(top_words, "top word count")?;
            let text = tokio::fs::read_to_string(&file).await?;

            let report = run_local(&text, sentences_per_section, top_k, &config).await?;
            ReportWriter::new(&config.output_dir).write(&report).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_roles_and_shared_flags() {
        let cli = Cli::try_parse_from([
            "text-pipeline",
            "--wire-format",
            "delimited",
            "producer",
            "book.txt",
            "4",
            "--workers",
            "2",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Command::Producer {
                sentences_per_section: 4,
                ..
            }
        ));
        let config = cli.pipeline.into_config();
        assert_eq!(config.wire_format, WireFormat::Delimited);
        assert_eq!(config.workers, 2);
    }

    #[test]
    fn test_cli_accepts_negative_counts_for_later_validation() {
        let cli = Cli::try_parse_from(["text-pipeline", "worker", "-3"]).unwrap();

        match cli.command {
            Command::Worker { top_words } => {
                assert!(positive_count(top_words, "top word count").is_err());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_wire_format() {
        let parsed = Cli::try_parse_from(["text-pipeline", "--wire-format", "xml", "worker", "3"]);

        assert!(parsed.is_err());
    }
}
