//! Outbound message type definitions for the live feed.

use serde::{Deserialize, Serialize};

use societyhub_entity::notification::Notification;

/// Messages pushed by the server to connected listeners.
///
/// Serialized as `{"event": "...", "payload": ...}` JSON text frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "camelCase")]
pub enum OutboundMessage {
    /// A visitor notification was just created.
    NewNotification(Notification),
    /// Server keepalive.
    Ping {
        /// Server timestamp (unix seconds).
        timestamp: i64,
    },
}
