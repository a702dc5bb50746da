//! Selection event bus
//!
//! Surfaces announce "the user picked this name" here; panels that
//! care subscribe and feed the raw name into their own `select`.
//! Events carry the name as entered, resolution to a code happens in
//! the panel.

use tokio::sync::broadcast;
use tracing::trace;

const BUS_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvent {
    pub raw_name: String,
}

#[derive(Debug)]
pub struct SelectionBus {
    tx: broadcast::Sender<SelectionEvent>,
}

impl SelectionBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BUS_CAPACITY);
        Self { tx }
    }

    /// Publish a selection. Having no subscribers is not an error.
    pub fn publish(&self, raw_name: impl Into<String>) {
        let event = SelectionEvent {
            raw_name: raw_name.into(),
        };
        trace!(name = %event.raw_name, "selection published");
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SelectionEvent> {
        self.tx.subscribe()
    }
}

impl Default for SelectionBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_subscribers_receive_events() {
        let bus = SelectionBus::new();
        let mut one = bus.subscribe();
        let mut two = bus.subscribe();

        bus.publish("United States");

        assert_eq!(one.recv().await.unwrap().raw_name, "United States");
        assert_eq!(two.recv().await.unwrap().raw_name, "United States");
    }

    #[test]
    fn test_publish_without_subscribers_does_not_panic() {
        let bus = SelectionBus::new();
        bus.publish("France");
    }
}
