//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationKind;

/// A visitor-arrival notification pushed to live listeners and retained
/// in a capped history.
///
/// Title and message are generated server-side from the submitted visitor
/// fields; they are never freely authored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// Display category.
    pub kind: NotificationKind,
    /// Generated title.
    pub title: String,
    /// Generated body text interpolating the visitor fields.
    pub message: String,
    /// Building the visitor is headed to.
    pub building_number: String,
    /// Visitor's name as reported at the gate.
    pub visitor_name: String,
    /// Reported arrival time.
    pub visit_time: String,
    /// Read flag. Monotonic: once `true`, nothing resets it.
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }
}
