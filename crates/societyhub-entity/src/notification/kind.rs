//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display category of a notification.
///
/// Visitor-arrival notifications are always created with `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Urgent attention required.
    Alert,
    /// Informational.
    Info,
    /// Positive confirmation.
    Success,
}

impl NotificationKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
