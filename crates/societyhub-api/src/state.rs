//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use societyhub_core::config::AppConfig;
use societyhub_database::repositories::alert::AlertRepository;
use societyhub_database::repositories::notification::NotificationRepository;
use societyhub_database::repositories::visitor::VisitorRepository;
use societyhub_realtime::hub::NotificationHub;
use societyhub_service::alert::service::AlertService;
use societyhub_service::notification::service::NotificationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Live notification feed
    pub hub: Arc<NotificationHub>,
    /// Alert repository
    pub alert_repo: Arc<AlertRepository>,
    /// Notification repository
    pub notification_repo: Arc<NotificationRepository>,
    /// Visitor log repository
    pub visitor_repo: Arc<VisitorRepository>,
    /// Alert review service
    pub alert_service: Arc<AlertService>,
    /// Visitor notification service
    pub notification_service: Arc<NotificationService>,
}
