//! Alert repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use societyhub_core::error::{AppError, ErrorKind};
use societyhub_core::result::AppResult;
use societyhub_entity::alert::{Alert, AlertLevel, AlertStatus};

/// Repository for alert persistence and status transitions.
#[derive(Debug, Clone)]
pub struct AlertRepository {
    pool: PgPool,
}

impl AlertRepository {
    /// Create a new alert repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new alert in `pending` state.
    pub async fn create(
        &self,
        title: &str,
        message: &str,
        level: Option<AlertLevel>,
        location: Option<&str>,
    ) -> AppResult<Alert> {
        sqlx::query_as::<_, Alert>(
            "INSERT INTO alerts (title, message, level, location) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(title)
        .bind(message)
        .bind(level)
        .bind(location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create alert", e))
    }

    /// Fetch a single alert by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Alert>> {
        sqlx::query_as::<_, Alert>("SELECT * FROM alerts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch alert", e))
    }

    /// List alerts, newest first, optionally filtered by status.
    pub async fn find_all(&self, status: Option<AlertStatus>) -> AppResult<Vec<Alert>> {
        let query = match status {
            Some(status) => sqlx::query_as::<_, Alert>(
                "SELECT * FROM alerts WHERE status = $1 ORDER BY created_at DESC",
            )
            .bind(status),
            None => sqlx::query_as::<_, Alert>("SELECT * FROM alerts ORDER BY created_at DESC"),
        };

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list alerts", e))
    }

    /// Apply a status transition as a compare-and-swap.
    ///
    /// The UPDATE is guarded on the alert still being `pending` at the
    /// version the caller read, so exactly one concurrent reviewer wins.
    /// Returns `None` when the guard did not match (stale version or an
    /// already-reviewed alert).
    pub async fn transition(
        &self,
        id: Uuid,
        new_status: AlertStatus,
        reject_reason: Option<&str>,
        current_version: i64,
    ) -> AppResult<Option<Alert>> {
        sqlx::query_as::<_, Alert>(
            "UPDATE alerts SET status = $2, reject_reason = $3, version = version + 1 \
             WHERE id = $1 AND status = 'pending' AND version = $4 \
             RETURNING *",
        )
        .bind(id)
        .bind(new_status)
        .bind(reject_reason)
        .bind(current_version)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to transition alert", e))
    }
}
