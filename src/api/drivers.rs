//! Qualified drivers API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::driver::{CreateDriver, Driver, UpdateDriver},
};

use super::AdminPasscode;

/// List active drivers
#[utoipa::path(
    get,
    path = "/drivers",
    tag = "drivers",
    security(("admin_passcode" = [])),
    responses(
        (status = 200, description = "Active drivers, name-ordered", body = Vec<Driver>)
    )
)]
pub async fn list_drivers(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
) -> AppResult<Json<Vec<Driver>>> {
    let drivers = state.services.drivers.list_active().await?;
    Ok(Json(drivers))
}

/// Create a driver
#[utoipa::path(
    post,
    path = "/drivers",
    tag = "drivers",
    security(("admin_passcode" = [])),
    request_body = CreateDriver,
    responses(
        (status = 201, description = "Driver created", body = Driver),
        (status = 409, description = "Badge number already exists")
    )
)]
pub async fn create_driver(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Json(data): Json<CreateDriver>,
) -> AppResult<(StatusCode, Json<Driver>)> {
    let driver = state.services.drivers.create(&data).await?;
    Ok((StatusCode::CREATED, Json(driver)))
}

/// Update a driver
#[utoipa::path(
    put,
    path = "/drivers/{id}",
    tag = "drivers",
    security(("admin_passcode" = [])),
    params(("id" = Uuid, Path, description = "Driver ID")),
    request_body = UpdateDriver,
    responses(
        (status = 200, description = "Driver updated", body = Driver),
        (status = 409, description = "Badge number already exists")
    )
)]
pub async fn update_driver(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateDriver>,
) -> AppResult<Json<Driver>> {
    let driver = state.services.drivers.update(id, &data).await?;
    Ok(Json(driver))
}

/// Deactivate a driver (soft delete)
#[utoipa::path(
    delete,
    path = "/drivers/{id}",
    tag = "drivers",
    security(("admin_passcode" = [])),
    params(("id" = Uuid, Path, description = "Driver ID")),
    responses(
        (status = 204, description = "Driver deactivated")
    )
)]
pub async fn delete_driver(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.drivers.deactivate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
