//! API handlers for LiftCheck REST endpoints

pub mod badge;
pub mod drivers;
pub mod equipment;
pub mod health;
pub mod maintenance;
pub mod notifications;
pub mod openapi;
pub mod questions;
pub mod submissions;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};

use crate::{error::AppError, AppState};

/// Extractor guarding the admin surface with the static passcode sent in
/// the X-Admin-Passcode header
pub struct AdminPasscode;

#[async_trait]
impl FromRequestParts<AppState> for AdminPasscode {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let passcode = parts
            .headers
            .get("x-admin-passcode")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authorization("Missing admin passcode".to_string()))?;

        if passcode != state.config.admin.passcode {
            return Err(AppError::Authorization("Invalid admin passcode".to_string()));
        }

        Ok(AdminPasscode)
    }
}
