//! In-process live tail of emitted messages.
//!
//! Backed by a `tokio::sync::broadcast` channel: any number of subscribers,
//! each sees every message published after it subscribed. A subscriber that
//! falls more than the channel capacity behind loses the oldest messages and
//! gets `RecvError::Lagged` / `TryRecvError::Lagged` once. Publishing never
//! waits for subscribers.

use tokio::sync::broadcast;

/// Messages kept for a slow subscriber before the oldest are dropped.
pub const LIVE_TAIL_CAPACITY: usize = 1024;

#[derive(Debug, Clone)]
pub struct LiveTail {
    sender: broadcast::Sender<String>,
}

impl LiveTail {
    pub fn new() -> Self {
        Self::with_capacity(LIVE_TAIL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Sends `message` to every current subscriber. A no-op without subscribers.
    pub fn publish(&self, message: &str) {
        if self.sender.receiver_count() > 0 {
            // Only fails when the last receiver went away in the meantime.
            let _ = self.sender.send(message.to_string());
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for LiveTail {
    fn default() -> Self {
        Self::new()
    }
}
