//! Pipeline Error Taxonomy
//!
//! Every role (producer, worker, aggregator) reports failures through
//! [`PipelineError`]. The variants split into two groups:
//!
//! - **Fatal**: `Connection`, `Config`, `Io`, `Queue`, `Serialization`. These escape the role and
//!   terminate the process with a non-zero exit status.
//! - **Per-message**: `MalformedMessage`. Consuming loops log it and drop the
//!   offending delivery; it never escapes a loop.

use thiserror::Error;

/// Errors produced by the text pipeline library.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The queue service could not be reached.
    #[error("Cannot connect to queue service: {0}")]
    Connection(String),

    /// A queue operation failed after the connection was established.
    #[error("Queue operation failed: {0}")]
    Queue(String),

    /// A message could not be decoded.
    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    /// An invalid startup argument (e.g. a non-positive section size).
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// Shorthand used by the codecs.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedMessage(reason.into())
    }
}

impl From<redis::RedisError> for PipelineError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_connection_refusal() || err.is_io_error() || err.is_connection_dropped() {
            Self::Connection(err.to_string())
        } else {
            Self::Queue(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
