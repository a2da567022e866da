//! Maintenance records API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::maintenance::{
        CreateMaintenance, MaintenanceQuery, MaintenanceRecord, UpdateMaintenance,
    },
};

use super::AdminPasscode;

/// List maintenance records, optionally filtered by status
#[utoipa::path(
    get,
    path = "/maintenance",
    tag = "maintenance",
    security(("admin_passcode" = [])),
    params(MaintenanceQuery),
    responses(
        (status = 200, description = "Maintenance records, newest first", body = Vec<MaintenanceRecord>)
    )
)]
pub async fn list_maintenance(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Query(query): Query<MaintenanceQuery>,
) -> AppResult<Json<Vec<MaintenanceRecord>>> {
    let records = state.services.maintenance.list(query.status).await?;
    Ok(Json(records))
}

/// Create a maintenance record
#[utoipa::path(
    post,
    path = "/maintenance",
    tag = "maintenance",
    security(("admin_passcode" = [])),
    request_body = CreateMaintenance,
    responses(
        (status = 201, description = "Record created", body = MaintenanceRecord)
    )
)]
pub async fn create_maintenance(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Json(data): Json<CreateMaintenance>,
) -> AppResult<(StatusCode, Json<MaintenanceRecord>)> {
    let record = state.services.maintenance.create(&data).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Update a maintenance record's triage fields
#[utoipa::path(
    put,
    path = "/maintenance/{id}",
    tag = "maintenance",
    security(("admin_passcode" = [])),
    params(("id" = Uuid, Path, description = "Maintenance record ID")),
    request_body = UpdateMaintenance,
    responses(
        (status = 200, description = "Record updated", body = MaintenanceRecord)
    )
)]
pub async fn update_maintenance(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateMaintenance>,
) -> AppResult<Json<MaintenanceRecord>> {
    let record = state.services.maintenance.update(id, &data).await?;
    Ok(Json(record))
}

/// Delete a maintenance record
#[utoipa::path(
    delete,
    path = "/maintenance/{id}",
    tag = "maintenance",
    security(("admin_passcode" = [])),
    params(("id" = Uuid, Path, description = "Maintenance record ID")),
    responses(
        (status = 204, description = "Record deleted")
    )
)]
pub async fn delete_maintenance(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.maintenance.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
