//! Alert creation, listing, and the guarded status transition.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use societyhub_core::error::AppError;
use societyhub_core::result::AppResult;
use societyhub_database::repositories::alert::AlertRepository;
use societyhub_entity::alert::{Alert, AlertLevel, AlertStatus};

/// Input for alert creation.
#[derive(Debug, Clone)]
pub struct NewAlert {
    /// Short headline. Required.
    pub title: String,
    /// Report body. Required.
    pub message: String,
    /// Optional severity category.
    pub level: Option<AlertLevel>,
    /// Optional location text.
    pub location: Option<String>,
}

/// Input for a status transition.
#[derive(Debug, Clone)]
pub struct TransitionRequest {
    /// Target status.
    pub status: AlertStatus,
    /// Reviewer's reason; required when rejecting, discarded otherwise.
    pub reject_reason: Option<String>,
    /// The version the reviewer read. When present, the transition is
    /// refused if the alert has moved on since.
    pub expected_version: Option<i64>,
}

/// Owns the emergency-alert review workflow.
#[derive(Debug, Clone)]
pub struct AlertService {
    /// Alert repository.
    alert_repo: Arc<AlertRepository>,
}

impl AlertService {
    /// Creates a new alert service.
    pub fn new(alert_repo: Arc<AlertRepository>) -> Self {
        Self { alert_repo }
    }

    /// Submits a new alert. The stored record always starts `pending`.
    pub async fn create_alert(&self, input: NewAlert) -> AppResult<Alert> {
        let title = required_text(&input.title, "title")?;
        let message = required_text(&input.message, "message")?;

        let alert = self
            .alert_repo
            .create(title, message, input.level, input.location.as_deref())
            .await?;

        info!(alert_id = %alert.id, level = ?alert.level, "Alert submitted");
        Ok(alert)
    }

    /// Lists alerts newest-first, optionally filtered by status.
    pub async fn list_alerts(&self, status: Option<AlertStatus>) -> AppResult<Vec<Alert>> {
        self.alert_repo.find_all(status).await
    }

    /// Fetches a single alert.
    pub async fn get_alert(&self, id: Uuid) -> AppResult<Alert> {
        self.alert_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Alert {id} not found")))
    }

    /// Applies a reviewer's decision to a pending alert.
    ///
    /// Transitions out of a terminal state are refused, rejecting requires
    /// a non-empty reason, and the write is a compare-and-swap on the
    /// version the alert had when it was read, so of two concurrent
    /// reviewers exactly one wins and the other sees a conflict.
    pub async fn transition_alert(&self, id: Uuid, request: TransitionRequest) -> AppResult<Alert> {
        let alert = self.get_alert(id).await?;

        if let Some(expected) = request.expected_version {
            if expected != alert.version {
                return Err(AppError::conflict(format!(
                    "Alert {id} is at version {}, reviewer saw {expected}",
                    alert.version
                )));
            }
        }

        if !alert.status.can_transition_to(request.status) {
            return Err(AppError::invalid_transition(format!(
                "Alert {id} cannot move from {} to {}",
                alert.status, request.status
            )));
        }

        let reason = match request.status {
            AlertStatus::Rejected => {
                let reason = request
                    .reject_reason
                    .as_deref()
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .ok_or_else(|| {
                        AppError::validation("reject_reason is required when rejecting an alert")
                    })?;
                Some(reason.to_string())
            }
            // Approval discards any supplied reason and clears the column.
            _ => None,
        };

        let updated = self
            .alert_repo
            .transition(id, request.status, reason.as_deref(), alert.version)
            .await?
            .ok_or_else(|| {
                AppError::conflict(format!("Alert {id} was reviewed concurrently, reload it"))
            })?;

        info!(
            alert_id = %updated.id,
            status = %updated.status,
            "Alert transitioned"
        );
        Ok(updated)
    }
}

fn required_text<'a>(value: &'a str, field: &str) -> AppResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    Ok(trimmed)
}
