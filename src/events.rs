//! Language change notifications for other page components.

use serde::{
    Deserialize,
    Serialize,
};
use tokio::sync::broadcast;

use crate::language::Language;

/// Payload of a language change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageChanged {
    pub language: Language,
}

/// A named event as seen by listeners.
///
/// Serializes as `{"name": "languageChanged", "detail": {"language": "en"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEvent {
    pub name: String,
    pub detail: LanguageChanged,
}

/// Capability to broadcast events within the page.
pub trait EventSink {
    fn publish(&mut self, event: PageEvent);
}

/// Discards every event.
impl EventSink for () {
    fn publish(&mut self, _event: PageEvent) {}
}

/// Records events in publication order.
impl EventSink for Vec<PageEvent> {
    fn publish(&mut self, event: PageEvent) {
        self.push(event);
    }
}

/// Fans events out to any number of subscribers.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<PageEvent>,
}

impl BroadcastNotifier {
    /// `capacity` bounds how many unread events a slow subscriber may lag.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PageEvent> {
        self.sender.subscribe()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(16)
    }
}

impl EventSink for BroadcastNotifier {
    fn publish(&mut self, event: PageEvent) {
        let name = event.name.clone();
        match self.sender.send(event) {
            Ok(receivers) => tracing::debug!(%name, receivers, "Event published"),
            Err(_) => tracing::debug!(%name, "Event dropped: no subscribers"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use tokio::sync::broadcast::error::TryRecvError;

    use super::*;

    fn changed(language: Language) -> PageEvent {
        PageEvent { name: "languageChanged".to_string(), detail: LanguageChanged { language } }
    }

    #[googletest::test]
    fn event_serializes_with_language_code() {
        let json = serde_json::to_value(changed(Language::English)).unwrap();

        expect_that!(
            json,
            eq(&serde_json::json!({"name": "languageChanged", "detail": {"language": "en"}}))
        );
    }

    #[googletest::test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<PageEvent> = Vec::new();

        sink.publish(changed(Language::English));
        sink.publish(changed(Language::Ukrainian));

        expect_that!(sink, elements_are![eq(&changed(Language::English)), eq(&changed(Language::Ukrainian))]);
    }

    #[googletest::test]
    fn broadcast_reaches_every_subscriber() {
        let mut notifier = BroadcastNotifier::default();
        let mut first = notifier.subscribe();
        let mut second = notifier.subscribe();

        notifier.publish(changed(Language::English));

        expect_that!(notifier.subscriber_count(), eq(2));
        expect_that!(first.try_recv().unwrap(), eq(&changed(Language::English)));
        expect_that!(second.try_recv().unwrap(), eq(&changed(Language::English)));
        assert!(matches!(first.try_recv(), Err(TryRecvError::Empty)));
    }

    #[googletest::test]
    fn broadcast_without_subscribers_is_not_an_error() {
        let mut notifier = BroadcastNotifier::new(0);

        notifier.publish(changed(Language::Ukrainian));

        expect_that!(notifier.subscriber_count(), eq(0));
    }

    #[tokio::test]
    async fn subscriber_awaits_next_event() {
        let mut notifier = BroadcastNotifier::default();
        let mut receiver = notifier.subscribe();

        let listener = tokio::spawn(async move { receiver.recv().await });
        notifier.publish(changed(Language::English));

        let event = listener.await.unwrap().unwrap();
        assert_eq!(event.detail.language, Language::English);
    }

    #[test]
    fn subscriber_receives_with_block_on() {
        let mut notifier = BroadcastNotifier::default();
        let mut receiver = notifier.subscribe();

        notifier.publish(changed(Language::Ukrainian));

        let event = tokio_test::block_on(receiver.recv()).unwrap();
        assert_eq!(event, changed(Language::Ukrainian));
    }
}
