//! Fail notifications API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        maintenance::{MaintenanceRecord, OpenFromNotification},
        notification::FailNotification,
    },
};

use super::AdminPasscode;

/// List unread fail notifications, newest first
#[utoipa::path(
    get,
    path = "/notifications",
    tag = "notifications",
    security(("admin_passcode" = [])),
    responses(
        (status = 200, description = "Unread notifications", body = Vec<FailNotification>)
    )
)]
pub async fn list_notifications(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
) -> AppResult<Json<Vec<FailNotification>>> {
    let notifications = state.services.notifications.unread().await?;
    Ok(Json(notifications))
}

/// Mark a notification read (idempotent)
#[utoipa::path(
    post,
    path = "/notifications/{id}/read",
    tag = "notifications",
    security(("admin_passcode" = [])),
    params(("id" = Uuid, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification is read", body = FailNotification)
    )
)]
pub async fn mark_notification_read(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path(id): Path<Uuid>,
) -> AppResult<Json<FailNotification>> {
    let notification = state.services.notifications.mark_read(id).await?;
    Ok(Json(notification))
}

/// Open a maintenance record from a fail notification
#[utoipa::path(
    post,
    path = "/notifications/{id}/maintenance",
    tag = "notifications",
    security(("admin_passcode" = [])),
    params(("id" = Uuid, Path, description = "Notification ID")),
    request_body = OpenFromNotification,
    responses(
        (status = 201, description = "Maintenance record opened with is_from_checklist set", body = MaintenanceRecord)
    )
)]
pub async fn open_maintenance_from_notification(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path(id): Path<Uuid>,
    Json(data): Json<OpenFromNotification>,
) -> AppResult<(StatusCode, Json<MaintenanceRecord>)> {
    let record = state
        .services
        .maintenance
        .open_from_notification(id, data.priority)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}
