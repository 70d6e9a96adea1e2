//! Alert handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use societyhub_core::error::AppError;
use societyhub_entity::alert::Alert;
use societyhub_service::alert::service::{NewAlert, TransitionRequest};

use crate::dto::request::{CreateAlertRequest, ListAlertsQuery, TransitionAlertRequest};
use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// POST /api/alerts
pub async fn create_alert(
    State(state): State<AppState>,
    Json(req): Json<CreateAlertRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Alert>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let alert = state
        .alert_service
        .create_alert(NewAlert {
            title: req.title,
            message: req.message,
            level: req.level,
            location: req.location,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(alert))))
}

/// GET /api/alerts?status=
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<ListAlertsQuery>,
) -> Result<Json<ApiResponse<Vec<Alert>>>, AppError> {
    let alerts = state.alert_service.list_alerts(query.status).await?;
    Ok(Json(ApiResponse::ok(alerts)))
}

/// GET /api/alerts/{id}
pub async fn get_alert(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Alert>>, AppError> {
    let alert = state.alert_service.get_alert(id).await?;
    Ok(Json(ApiResponse::ok(alert)))
}

/// PATCH /api/alerts/{id}
pub async fn transition_alert(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TransitionAlertRequest>,
) -> Result<Json<ApiResponse<Alert>>, AppError> {
    let alert = state
        .alert_service
        .transition_alert(
            id,
            TransitionRequest {
                status: req.status,
                reject_reason: req.reject_reason,
                expected_version: req.expected_version,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(alert)))
}
