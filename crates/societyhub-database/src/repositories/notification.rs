//! Notification repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use societyhub_core::error::{AppError, ErrorKind};
use societyhub_core::result::AppResult;
use societyhub_entity::notification::{Notification, NotificationKind};

/// Repository for the visitor notification feed.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a notification.
    pub async fn create(
        &self,
        kind: NotificationKind,
        title: &str,
        message: &str,
        building_number: &str,
        visitor_name: &str,
        visit_time: &str,
    ) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (kind, title, message, building_number, visitor_name, visit_time) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(kind)
        .bind(title)
        .bind(message)
        .bind(building_number)
        .bind(visitor_name)
        .bind(visit_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
        })
    }

    /// List the most recent notifications, newest first, capped at `limit`.
    pub async fn find_recent(&self, limit: i64) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }

    /// Count unread notifications.
    pub async fn count_unread(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE is_read = FALSE",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Mark a single notification as read.
    ///
    /// The write is unconditional on the current flag, which makes the
    /// operation idempotent; re-marking an already-read row returns the
    /// row unchanged. Returns `None` when the id does not exist.
    pub async fn mark_read(&self, id: Uuid) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>(
            "UPDATE notifications SET is_read = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))
    }

    /// Mark every notification as read. Returns the number of rows that
    /// actually flipped.
    pub async fn mark_all_read(&self) -> AppResult<u64> {
        let result = sqlx::query("UPDATE notifications SET is_read = TRUE WHERE is_read = FALSE")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark all read", e))?;
        Ok(result.rows_affected())
    }
}
