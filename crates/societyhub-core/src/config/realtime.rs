//! Real-time notification feed configuration.

use serde::{Deserialize, Serialize};

/// Real-time feed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Internal buffer size for the broadcast channel. Listeners that fall
    /// further behind than this drop events and must reconcile via the
    /// list endpoint.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer_size: usize,
    /// Notification-specific settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: default_channel_buffer(),
            notifications: NotificationsConfig::default(),
        }
    }
}

/// Notification feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Maximum number of notifications returned by the history listing.
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

fn default_channel_buffer() -> usize {
    256
}

fn default_history_limit() -> u32 {
    50
}
