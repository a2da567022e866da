//! Qualified driver model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A driver qualified to operate forklift equipment
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Driver {
    pub id: Uuid,
    /// Badge number typed by the operator; unique among active drivers
    pub badge_number: String,
    pub driver_name: String,
    pub is_active: bool,
    pub certified_date: Option<NaiveDate>,
    pub recertify_date: Option<NaiveDate>,
    pub trainer: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create driver request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDriver {
    #[validate(length(min = 1, message = "Badge number is required"))]
    pub badge_number: String,
    #[validate(length(min = 1, message = "Driver name is required"))]
    pub driver_name: String,
    pub certified_date: Option<NaiveDate>,
    pub recertify_date: Option<NaiveDate>,
    pub trainer: Option<String>,
}

/// Update driver request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDriver {
    #[validate(length(min = 1, message = "Badge number is required"))]
    pub badge_number: String,
    #[validate(length(min = 1, message = "Driver name is required"))]
    pub driver_name: String,
    pub certified_date: Option<NaiveDate>,
    pub recertify_date: Option<NaiveDate>,
    pub trainer: Option<String>,
}
