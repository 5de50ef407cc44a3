//! Broadcast hub fanning reminders out to every connected subscriber.

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::core::{NotificationSink, ReminderError, ReminderEvent};

/// Default number of buffered events per subscriber.
pub const DEFAULT_HUB_CAPACITY: usize = 256;

/// `tokio::sync::broadcast` backed notification sink.
///
/// Each subscriber (typically one per websocket or SSE connection) gets its
/// own copy of every event. Publishing with nobody connected succeeds; a
/// subscriber that falls more than `capacity` events behind misses events
/// rather than stalling the worker.
#[derive(Debug, Clone)]
pub struct BroadcastHub {
    sender: broadcast::Sender<ReminderEvent>,
}

impl BroadcastHub {
    /// Create a hub buffering up to `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Register a new subscriber that receives all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<ReminderEvent> {
        self.sender.subscribe()
    }

    /// Number of connected subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastHub {
    fn default() -> Self {
        Self::new(DEFAULT_HUB_CAPACITY)
    }
}

#[async_trait]
impl NotificationSink for BroadcastHub {
    async fn broadcast(&self, event: ReminderEvent) -> Result<(), ReminderError> {
        // Err only means nobody is listening right now.
        let delivered = self.sender.send(event).unwrap_or(0);
        tracing::trace!("reminder delivered to {} subscribers", delivered);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn event(title: &str) -> ReminderEvent {
        ReminderEvent {
            guid: Uuid::new_v4(),
            title: title.into(),
            due_date: NaiveDate::from_ymd_opt(2025, 10, 26).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_broadcast_without_subscribers_succeeds() {
        let hub = BroadcastHub::default();
        assert_eq!(hub.subscriber_count(), 0);
        assert!(hub.broadcast(event("nobody listening")).await.is_ok());
    }

    #[tokio::test]
    async fn test_every_subscriber_receives_in_order() {
        let hub = BroadcastHub::new(8);
        let mut first = hub.subscribe();
        let mut second = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 2);

        hub.broadcast(event("a")).await.unwrap();
        hub.broadcast(event("b")).await.unwrap();

        for rx in [&mut first, &mut second] {
            assert_eq!(rx.recv().await.unwrap().title, "a");
            assert_eq!(rx.recv().await.unwrap().title, "b");
        }
    }
}
