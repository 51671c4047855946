//! Redis-Backed Queue
//!
//! Each queue is a Redis list. Messages are pushed on the left (`LPUSH`) and
//! taken from the right (`BRPOP`), which gives FIFO order across any number of
//! producer, worker and aggregator processes. Durability is whatever the Redis
//! server's persistence settings provide.

use super::QueueService;
use crate::error::{PipelineError, Result};

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::time::Duration;

/// Queue service talking to a Redis server.
#[derive(Clone)]
pub struct RedisQueue {
    /// Connection manager (reconnects automatically, cheap to clone).
    redis: ConnectionManager,
}

impl RedisQueue {
    /// Connects to Redis.
    ///
    /// # Arguments
    /// * `url` - Redis connection URL (e.g. `redis://127.0.0.1:6379`).
    ///
    /// # Errors
    /// Returns `PipelineError::Connection` if the server cannot be reached.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| PipelineError::Connection(format!("{}: {}", url, e)))?;

        let redis = ConnectionManager::new(client)
            .await
            .map_err(|e| PipelineError::Connection(format!("{}: {}", url, e)))?;

        tracing::info!("Connected to queue service at {}", url);
        Ok(Self { redis })
    }
}

#[async_trait]
impl QueueService for RedisQueue {
    /// Lists need no declaration; this only checks the server answers.
    async fn declare(&self, queue: &str) -> Result<()> {
        let mut conn = self.redis.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        tracing::debug!("Declared Redis queue '{}'", queue);
        Ok(())
    }

    async fn publish(&self, queue: &str, payload: Vec<u8>) -> Result<()> {
        let mut conn = self.redis.clone();
        let _: () = conn.lpush(queue, payload).await?;
        Ok(())
    }

    async fn receive(&self, queue: &str, timeout: Duration) -> Result<Option<Vec<u8>>> {
        let mut conn = self.redis.clone();
        // A BRPOP timeout of 0 blocks forever, so wait at least one second.
        let timeout_secs = timeout.as_secs().max(1);

        let popped: Option<(String, Vec<u8>)> = redis::cmd("BRPOP")
            .arg(queue)
            .arg(timeout_secs)
            .query_async(&mut conn)
            .await?;

        Ok(popped.map(|(_, payload)| payload))
    }
}
