//! Equipment unit model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A forklift unit that can be inspected
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentUnit {
    pub id: Uuid,
    /// Display name, e.g. "Forklift 2"
    pub name: String,
    /// Unique unit number, e.g. "FL-002"
    pub unit_number: String,
    /// Pre-selected unit on the operator checklist; at most one active
    /// unit may be default
    pub is_default: bool,
    /// Soft-delete flag; inactive units are hidden but kept for
    /// referential integrity of historical submissions
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Create equipment unit request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipmentUnit {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Unit number is required"))]
    pub unit_number: String,
}
