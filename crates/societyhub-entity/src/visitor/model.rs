//! Visitor log entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A gate-log record of a visitor arrival.
///
/// Written as a second, independent projection of the same submission
/// that produces a [`crate::Notification`]; the two are deliberately not
/// linked by a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Visitor {
    /// Unique log entry identifier.
    pub id: Uuid,
    /// Visitor's name.
    pub visitor_name: String,
    /// Destination building.
    pub building_number: String,
    /// Reported arrival time.
    pub visit_time: String,
    /// Contact number, when collected at the gate.
    pub phone_number: Option<String>,
    /// Stated purpose of the visit.
    pub purpose: Option<String>,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last updated.
    pub updated_at: DateTime<Utc>,
}
