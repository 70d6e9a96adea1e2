//! Emergency alert entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::level::AlertLevel;
use super::status::AlertStatus;

/// An emergency report submitted by a resident or staff member,
/// awaiting review by a president or admin.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Alert {
    /// Unique alert identifier.
    pub id: Uuid,
    /// Short headline.
    pub title: String,
    /// Report body text.
    pub message: String,
    /// Severity category, if the submitter classified it.
    pub level: Option<AlertLevel>,
    /// Free-text location within the property.
    pub location: Option<String>,
    /// Current review status.
    pub status: AlertStatus,
    /// Reviewer's reason; present exactly when `status` is `rejected`.
    pub reject_reason: Option<String>,
    /// Optimistic-concurrency token, incremented by every transition.
    pub version: i64,
    /// When the alert was submitted. Never mutated.
    pub created_at: DateTime<Utc>,
}

impl Alert {
    /// Check if the alert is still awaiting review.
    pub fn is_pending(&self) -> bool {
        self.status == AlertStatus::Pending
    }
}
