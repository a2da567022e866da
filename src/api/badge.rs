//! Badge validation API endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, services::badge::BadgeVerdict};

#[derive(Deserialize, ToSchema)]
pub struct BadgeCheckRequest {
    pub badge_number: String,
}

#[derive(Serialize, ToSchema)]
pub struct BadgeCheckResponse {
    pub authorized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
}

/// Check a badge number against the active driver list
#[utoipa::path(
    post,
    path = "/badge/check",
    tag = "badge",
    request_body = BadgeCheckRequest,
    responses(
        (status = 200, description = "Lookup result; too-short badges are reported as not authorized without a lookup", body = BadgeCheckResponse)
    )
)]
pub async fn check_badge(
    State(state): State<crate::AppState>,
    Json(data): Json<BadgeCheckRequest>,
) -> AppResult<Json<BadgeCheckResponse>> {
    let response = match state.services.badge.check(&data.badge_number).await? {
        BadgeVerdict::Authorized { driver_name } => BadgeCheckResponse {
            authorized: true,
            driver_name: Some(driver_name),
        },
        BadgeVerdict::NotAuthorized | BadgeVerdict::Unknown => BadgeCheckResponse {
            authorized: false,
            driver_name: None,
        },
    };
    Ok(Json(response))
}
