//! # societyhub-realtime
//!
//! Real-time notification feed for SocietyHub. Provides:
//!
//! - An in-memory pub/sub hub over a tokio broadcast channel
//! - The outbound wire message types pushed to connected listeners
//!
//! The hub is a convenience layer over the durable store, never the
//! source of truth: delivery is best-effort and at-most-once per
//! connected listener, with zero persistence. Listeners reconcile via
//! the notification list endpoint on (re)connect.

pub mod hub;
pub mod message;

pub use hub::NotificationHub;
pub use message::types::OutboundMessage;
