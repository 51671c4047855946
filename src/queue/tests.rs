//! Queue Module Tests
//!
//! Exercises the in-memory queue service. The Redis backend needs a live server
//! and is covered by running the roles against one.

#[cfg(test)]
mod tests {
    use crate::queue::{MemoryQueue, QueueService};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_memory_queue_is_fifo() {
        let queue = MemoryQueue::new();
        queue.declare("tasks").await.unwrap();

        for i in 0..3u8 {
            queue.publish("tasks", vec![i]).await.unwrap();
        }

        for i in 0..3u8 {
            let message = queue.receive("tasks", Duration::from_millis(10)).await.unwrap();
            assert_eq!(message, Some(vec![i]));
        }
        assert!(queue.is_empty("tasks").await);
    }

    #[tokio::test]
    async fn test_memory_queue_times_out_when_empty() {
        let queue = MemoryQueue::new();

        let message = queue.receive("empty", Duration::from_millis(20)).await.unwrap();

        assert!(message.is_none());
    }

    #[tokio::test]
    async fn test_memory_queues_are_independent() {
        let queue = MemoryQueue::new();
        queue.publish("a", b"first".to_vec()).await.unwrap();

        assert_eq!(queue.len("a").await, 1);
        assert_eq!(queue.len("b").await, 0);
        assert!(queue
            .receive("b", Duration::from_millis(5))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_memory_queue_wakes_blocked_receiver() {
        let queue = MemoryQueue::new();
        let receiver = {
            let queue = queue.clone();
            tokio::spawn(async move { queue.receive("results", Duration::from_secs(5)).await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        queue.publish("results", b"late".to_vec()).await.unwrap();

        let message = receiver.await.unwrap().unwrap();
        assert_eq!(message, Some(b"late".to_vec()));
    }

    #[tokio::test]
    async fn test_memory_queue_delivers_each_message_once_to_competing_consumers() {
        let queue = MemoryQueue::new();
        for i in 0..50u8 {
            queue.publish("tasks", vec![i]).await.unwrap();
        }

        let mut handles = Vec::new();
        for _ in 0..4 {
            let queue: Arc<MemoryQueue> = queue.clone();
            handles.push(tokio::spawn(async move {
                let mut taken = Vec::new();
                while let Some(message) = queue
                    .receive("tasks", Duration::from_millis(20))
                    .await
                    .unwrap()
                {
                    taken.push(message[0]);
                }
                taken
            }));
        }

        let mut all = Vec::new();
        for handle in handles {
            all.extend(handle.await.unwrap());
        }
        all.sort();

        assert_eq!(all, (0..50u8).collect::<Vec<_>>());
    }
}
