//! Equipment API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        equipment::{CreateEquipmentUnit, EquipmentUnit},
        question::Question,
    },
};

use super::AdminPasscode;

/// List active equipment units
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    responses(
        (status = 200, description = "Active equipment units", body = Vec<EquipmentUnit>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<EquipmentUnit>>> {
    let units = state.services.equipment.list_active().await?;
    Ok(Json(units))
}

/// The unit pre-selected on the operator checklist
#[utoipa::path(
    get,
    path = "/equipment/default",
    tag = "equipment",
    responses(
        (status = 200, description = "Default unit, or first active unit when no default is set", body = EquipmentUnit),
        (status = 404, description = "No active units exist")
    )
)]
pub async fn get_default_equipment(
    State(state): State<crate::AppState>,
) -> AppResult<Json<EquipmentUnit>> {
    let unit = state.services.equipment.default_unit().await?;
    Ok(Json(unit))
}

/// Questions applicable to one unit under the configured resolution mode
#[utoipa::path(
    get,
    path = "/equipment/{id}/questions",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment unit ID")),
    responses(
        (status = 200, description = "Ordered applicable questions; empty in per-equipment mode when nothing is assigned", body = Vec<Question>)
    )
)]
pub async fn list_unit_questions(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Question>>> {
    let questions = state.services.checklist.questions_for_unit(id).await?;
    Ok(Json(questions))
}

/// Create an equipment unit
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    security(("admin_passcode" = [])),
    request_body = CreateEquipmentUnit,
    responses(
        (status = 201, description = "Unit created", body = EquipmentUnit),
        (status = 409, description = "Unit number already exists")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Json(data): Json<CreateEquipmentUnit>,
) -> AppResult<(StatusCode, Json<EquipmentUnit>)> {
    let unit = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(unit)))
}

/// Make one unit the default
#[utoipa::path(
    put,
    path = "/equipment/{id}/default",
    tag = "equipment",
    security(("admin_passcode" = [])),
    params(("id" = Uuid, Path, description = "Equipment unit ID")),
    responses(
        (status = 200, description = "Unit is now the only default", body = EquipmentUnit)
    )
)]
pub async fn set_default_equipment(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EquipmentUnit>> {
    let unit = state.services.equipment.set_default(id).await?;
    Ok(Json(unit))
}

/// Deactivate a unit (soft delete)
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("admin_passcode" = [])),
    params(("id" = Uuid, Path, description = "Equipment unit ID")),
    responses(
        (status = 204, description = "Unit deactivated")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.equipment.deactivate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
