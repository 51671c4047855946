//! In-Memory Queue
//!
//! Named FIFO queues living inside one process. Each queue is a `VecDeque`
//! guarded by a mutex plus a `Notify` that wakes blocked receivers.

use super::QueueService;
use crate::error::Result;

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify};
use tokio::time::Instant;

#[derive(Default)]
struct Channel {
    messages: Mutex<VecDeque<Vec<u8>>>,
    ready: Notify,
}

impl Channel {
    async fn pop(&self) -> Option<Vec<u8>> {
        self.messages.lock().await.pop_front()
    }
}

/// Process-local queue service. Publishing to an undeclared queue creates it.
#[derive(Default)]
pub struct MemoryQueue {
    /// Queue name -> channel.
    channels: DashMap<String, Arc<Channel>>,
}

impl MemoryQueue {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn channel(&self, queue: &str) -> Arc<Channel> {
        self.channels
            .entry(queue.to_string())
            .or_default()
            .value()
            .clone()
    }

    /// Number of messages waiting in a queue.
    pub async fn len(&self, queue: &str) -> usize {
        match self.channels.get(queue).map(|entry| entry.value().clone()) {
            Some(channel) => channel.messages.lock().await.len(),
            None => 0,
        }
    }

    pub async fn is_empty(&self, queue: &str) -> bool {
        self.len(queue).await == 0
    }
}

#[async_trait]
impl QueueService for MemoryQueue {
    async fn declare(&self, queue: &str) -> Result<()> {
        self.channel(queue);
        tracing::debug!("Declared in-memory queue '{}'", queue);
        Ok(())
    }

    async fn publish(&self, queue: &str, payload: Vec<u8>) -> Result<()> {
        let channel = self.channel(queue);
        channel.messages.lock().await.push_back(payload);
        channel.ready.notify_one();
        Ok(())
    }

    async fn receive(&self, queue: &str, timeout: Duration) -> Result<Option<Vec<u8>>> {
        let channel = self.channel(queue);
        let deadline = Instant::now() + timeout;

        loop {
            if let Some(message) = channel.pop().await {
                return Ok(Some(message));
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(None);
            }

            if tokio::time::timeout(remaining, channel.ready.notified())
                .await
                .is_err()
            {
                return Ok(channel.pop().await);
            }
        }
    }
}
