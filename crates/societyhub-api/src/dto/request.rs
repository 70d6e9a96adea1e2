//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use societyhub_entity::alert::{AlertLevel, AlertStatus};

/// Create alert request body.
///
/// Unknown fields are rejected as malformed input.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateAlertRequest {
    /// Short headline.
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    /// Report body text.
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
    /// Severity category.
    pub level: Option<AlertLevel>,
    /// Location within the property.
    pub location: Option<String>,
}

/// Alert status transition request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionAlertRequest {
    /// Target status.
    pub status: AlertStatus,
    /// Reviewer's reason; required when rejecting.
    pub reject_reason: Option<String>,
    /// Version the reviewer read, for optimistic concurrency.
    pub expected_version: Option<i64>,
}

/// Alert list query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ListAlertsQuery {
    /// Optional status filter.
    pub status: Option<AlertStatus>,
}

/// Visitor-arrival submission from the gate.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVisitorNotificationRequest {
    /// Destination building.
    #[validate(length(min = 1, message = "building_number is required"))]
    pub building_number: String,
    /// Visitor's name.
    #[validate(length(min = 1, message = "visitor_name is required"))]
    pub visitor_name: String,
    /// Reported arrival time.
    #[validate(length(min = 1, message = "visit_time is required"))]
    pub visit_time: String,
}
