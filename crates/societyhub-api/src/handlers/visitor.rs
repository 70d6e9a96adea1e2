//! Visitor log handlers.

use axum::Json;
use axum::extract::State;

use societyhub_core::error::AppError;
use societyhub_entity::visitor::Visitor;

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// Cap applied to the visitor log listing.
const VISITOR_LOG_LIMIT: i64 = 50;

/// GET /api/visitors
pub async fn list_visitors(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Visitor>>>, AppError> {
    let visitors = state.visitor_repo.find_recent(VISITOR_LOG_LIMIT).await?;
    Ok(Json(ApiResponse::ok(visitors)))
}
