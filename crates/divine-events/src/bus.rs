#![forbid(unsafe_code)]

use tokio::sync::broadcast;

use crate::Event;

/// Fan-out channel for [`Event`]s.
///
/// Clones share one sender. A receiver more than `capacity` events behind
/// skips ahead and gets `RecvError::Lagged` on its next `recv`.
#[derive(Clone, Debug)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            sender: broadcast::Sender::new(capacity.max(1)),
        }
    }

    /// Returns how many receivers the event reached; 0 when nobody listens.
    pub fn publish(&self, event: impl Into<Event>) -> usize {
        self.sender.send(event.into()).unwrap_or(0)
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
