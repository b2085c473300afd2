use std::sync::Arc;

use chrono::Utc;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::types::{CmsEvent, ContactReceivedEvent, PageSavedEvent};

/// In-process event bus backed by `tokio::broadcast`. Single-node;
/// slow receivers lose events rather than applying backpressure.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: Arc<broadcast::Sender<CmsEvent>>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Publish an event to all current subscribers. A send with no
    /// listeners is not an error worth surfacing.
    pub fn publish(&self, event: CmsEvent) {
        if self.sender.send(event).is_err() {
            tracing::debug!("event published with no subscribers");
        }
    }

    pub fn page_saved(&self, slug: &str, revision: i64) {
        self.publish(CmsEvent::PageSaved(PageSavedEvent {
            slug: slug.to_string(),
            revision,
            timestamp: Utc::now(),
        }));
    }

    pub fn contact_received(&self, submission_id: Uuid) {
        self.publish(CmsEvent::ContactReceived(ContactReceivedEvent {
            submission_id,
            timestamp: Utc::now(),
        }));
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CmsEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn page_saved_reaches_subscribers() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.page_saved("promo", 3);

        match rx.recv().await.unwrap() {
            CmsEvent::PageSaved(event) => {
                assert_eq!(event.slug, "promo");
                assert_eq!(event.revision, 3);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn all_subscribers_see_each_event() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(CmsEvent::Welcome);

        assert!(matches!(rx1.recv().await.unwrap(), CmsEvent::Welcome));
        assert!(matches!(rx2.recv().await.unwrap(), CmsEvent::Welcome));
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::default();
        bus.page_saved("promo", 1);
    }
}
