//! Queue Service Module
//!
//! The roles never talk to each other directly. All traffic goes through a
//! queue service with at-least-once, FIFO delivery:
//!
//! - The **producer** publishes tasks on the task queue and the section count on the result queue.
//! - **Workers** receive tasks and publish results on the result queue.
//! - The **aggregator** receives from the result queue only.
//!
//! ## Implementations
//! - **`memory`**: in-process queues for tests and the single-process `local` runner.
//! - **`redis_backend`**: Redis lists (`LPUSH` / `BRPOP`) shared by separate processes.

pub mod memory;
pub mod redis_backend;

pub use memory::MemoryQueue;
pub use redis_backend::RedisQueue;

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Interface the pipeline requires from a message broker.
#[async_trait]
pub trait QueueService: Send + Sync {
    /// Makes sure a queue exists before it is used.
    async fn declare(&self, queue: &str) -> Result<()>;

    /// Appends a message to the tail of a queue.
    async fn publish(&self, queue: &str, payload: Vec<u8>) -> Result<()>;

    /// Takes the message at the head of a queue, waiting up to `timeout`.
    ///
    /// Returns `Ok(None)` if nothing arrived in time. Callers simply poll again.
    async fn receive(&self, queue: &str, timeout: Duration) -> Result<Option<Vec<u8>>>;
}

#[cfg(test)]
mod tests;
