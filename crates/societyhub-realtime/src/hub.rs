//! In-memory pub/sub hub for the live notification feed.

use tokio::sync::broadcast;
use tracing::debug;

use crate::message::types::OutboundMessage;

/// In-memory pub/sub over a single broadcast channel.
///
/// Publishing never blocks and never fails the caller: a send with no
/// subscribers is silently dropped, and a subscriber that lags past the
/// channel buffer loses the oldest events. Listeners that need a
/// consistent view pull the persisted history instead.
#[derive(Debug)]
pub struct NotificationHub {
    /// Broadcast sender shared by all publishers.
    tx: broadcast::Sender<OutboundMessage>,
}

impl NotificationHub {
    /// Create a new hub with the given channel buffer size.
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size);
        Self { tx }
    }

    /// Push a message to every currently subscribed listener.
    pub fn publish(&self, msg: OutboundMessage) {
        match self.tx.send(msg) {
            Ok(listeners) => debug!(listeners, "Event published to live feed"),
            Err(_) => debug!("No listeners connected, event dropped"),
        }
    }

    /// Subscribe to the feed. The receiver sees future events only.
    pub fn subscribe(&self) -> broadcast::Receiver<OutboundMessage> {
        self.tx.subscribe()
    }

    /// Number of currently subscribed listeners.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
