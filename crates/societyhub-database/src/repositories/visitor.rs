//! Visitor log repository implementation.

use sqlx::PgPool;

use societyhub_core::error::{AppError, ErrorKind};
use societyhub_core::result::AppResult;
use societyhub_entity::visitor::Visitor;

/// Repository for the visitor side log.
#[derive(Debug, Clone)]
pub struct VisitorRepository {
    pool: PgPool,
}

impl VisitorRepository {
    /// Create a new visitor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a visitor log entry.
    pub async fn create(
        &self,
        visitor_name: &str,
        building_number: &str,
        visit_time: &str,
        phone_number: Option<&str>,
        purpose: Option<&str>,
    ) -> AppResult<Visitor> {
        sqlx::query_as::<_, Visitor>(
            "INSERT INTO visitors (visitor_name, building_number, visit_time, phone_number, purpose) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(visitor_name)
        .bind(building_number)
        .bind(visit_time)
        .bind(phone_number)
        .bind(purpose)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create visitor entry", e)
        })
    }

    /// List the most recent visitor entries, newest first.
    pub async fn find_recent(&self, limit: i64) -> AppResult<Vec<Visitor>> {
        sqlx::query_as::<_, Visitor>("SELECT * FROM visitors ORDER BY created_at DESC LIMIT $1")
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list visitor entries", e)
            })
    }
}
