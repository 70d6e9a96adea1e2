//! Visitor-notification creation, listing, and read-state management.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use societyhub_core::error::AppError;
use societyhub_core::result::AppResult;
use societyhub_database::repositories::notification::NotificationRepository;
use societyhub_database::repositories::visitor::VisitorRepository;
use societyhub_entity::notification::{Notification, NotificationKind};
use societyhub_realtime::hub::NotificationHub;
use societyhub_realtime::message::types::OutboundMessage;

use super::format;

/// A visitor-arrival submission from the gate.
#[derive(Debug, Clone)]
pub struct VisitorArrival {
    /// Destination building. Required.
    pub building_number: String,
    /// Visitor's name. Required.
    pub visitor_name: String,
    /// Reported arrival time. Required.
    pub visit_time: String,
}

/// Manages the visitor notification feed.
#[derive(Debug)]
pub struct NotificationService {
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
    /// Visitor side-log repository.
    visitor_repo: Arc<VisitorRepository>,
    /// Live feed the created notifications are pushed through.
    hub: Arc<NotificationHub>,
    /// Cap applied to history listings.
    history_limit: i64,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(
        notification_repo: Arc<NotificationRepository>,
        visitor_repo: Arc<VisitorRepository>,
        hub: Arc<NotificationHub>,
        history_limit: u32,
    ) -> Self {
        Self {
            notification_repo,
            visitor_repo,
            hub,
            history_limit: i64::from(history_limit),
        }
    }

    /// Records a visitor arrival: persists the notification, appends the
    /// visitor side log, and pushes the stored record to the live feed.
    ///
    /// The broadcast is issued only after the notification write commits,
    /// and a publish with nobody listening is not an error. The side log
    /// is an independent projection of the same event; a failure there is
    /// logged and never fails the request.
    pub async fn create_visitor_notification(
        &self,
        arrival: VisitorArrival,
    ) -> AppResult<Notification> {
        let building_number = required_text(&arrival.building_number, "building_number")?;
        let visitor_name = required_text(&arrival.visitor_name, "visitor_name")?;
        let visit_time = required_text(&arrival.visit_time, "visit_time")?;

        let message = format::visitor_arrival_message(visitor_name, building_number, visit_time);

        let notification = self
            .notification_repo
            .create(
                NotificationKind::Info,
                format::VISITOR_ARRIVAL_TITLE,
                &message,
                building_number,
                visitor_name,
                visit_time,
            )
            .await?;

        if let Err(e) = self
            .visitor_repo
            .create(visitor_name, building_number, visit_time, None, None)
            .await
        {
            warn!(error = %e, "Visitor side-log write failed");
        }

        self.hub
            .publish(OutboundMessage::NewNotification(notification.clone()));

        info!(
            notification_id = %notification.id,
            building = %notification.building_number,
            "Visitor notification created"
        );
        Ok(notification)
    }

    /// Lists the most recent notifications, newest first, capped at the
    /// configured history limit.
    pub async fn list_notifications(&self) -> AppResult<Vec<Notification>> {
        self.notification_repo.find_recent(self.history_limit).await
    }

    /// Counts unread notifications.
    pub async fn unread_count(&self) -> AppResult<i64> {
        self.notification_repo.count_unread().await
    }

    /// Marks one notification as read. Re-marking an already-read
    /// notification succeeds without further effect.
    pub async fn mark_read(&self, id: Uuid) -> AppResult<Notification> {
        self.notification_repo
            .mark_read(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Notification {id} not found")))
    }

    /// Marks every notification as read. Returns how many rows flipped;
    /// re-running returns zero.
    pub async fn mark_all_read(&self) -> AppResult<u64> {
        self.notification_repo.mark_all_read().await
    }
}

fn required_text<'a>(value: &'a str, field: &str) -> AppResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    Ok(trimmed)
}
