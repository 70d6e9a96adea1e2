//! Notification handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use societyhub_core::error::AppError;
use societyhub_entity::notification::Notification;
use societyhub_service::notification::service::VisitorArrival;

use crate::dto::request::CreateVisitorNotificationRequest;
use crate::dto::response::{ApiResponse, CountResponse, MarkedResponse};
use crate::state::AppState;

/// POST /api/notifications/visitor
pub async fn create_visitor_notification(
    State(state): State<AppState>,
    Json(req): Json<CreateVisitorNotificationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Notification>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let notification = state
        .notification_service
        .create_visitor_notification(VisitorArrival {
            building_number: req.building_number,
            visitor_name: req.visitor_name,
            visit_time: req.visit_time,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(notification))))
}

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Notification>>>, AppError> {
    let notifications = state.notification_service.list_notifications().await?;
    Ok(Json(ApiResponse::ok(notifications)))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CountResponse>>, AppError> {
    let count = state.notification_service.unread_count().await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Notification>>, AppError> {
    let notification = state.notification_service.mark_read(id).await?;
    Ok(Json(ApiResponse::ok(notification)))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<MarkedResponse>>, AppError> {
    let marked = state.notification_service.mark_all_read().await?;
    Ok(Json(ApiResponse::ok(MarkedResponse { marked })))
}
