//! Maintenance record model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::{MaintenancePriority, MaintenanceStatus};

/// A tracked repair/issue ticket, optionally opened from a failed
/// checklist item
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub issue_description: String,
    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    pub reported_by: Option<String>,
    pub reported_at: DateTime<Utc>,
    /// Stamped when the record first moves to in_progress
    pub started_at: Option<DateTime<Utc>>,
    /// Stamped when the record first moves to completed
    pub completed_at: Option<DateTime<Utc>>,
    pub work_performed: Option<String>,
    pub parts_used: Option<String>,
    pub technician_name: Option<String>,
    #[schema(value_type = f64)]
    pub estimated_cost: Option<Decimal>,
    #[schema(value_type = f64)]
    pub actual_cost: Option<Decimal>,
    #[schema(value_type = f64)]
    pub downtime_hours: Option<Decimal>,
    pub notes: Option<String>,
    /// True when the record was opened from a fail notification
    pub is_from_checklist: bool,
}

/// Create maintenance record request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMaintenance {
    pub equipment_id: Uuid,
    #[validate(length(min = 1, message = "Issue description is required"))]
    pub issue_description: String,
    pub priority: Option<MaintenancePriority>,
    pub reported_by: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub estimated_cost: Option<Decimal>,
    pub notes: Option<String>,
}

/// Update maintenance record request (triage metadata)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMaintenance {
    pub status: Option<MaintenanceStatus>,
    pub priority: Option<MaintenancePriority>,
    pub work_performed: Option<String>,
    pub parts_used: Option<String>,
    pub technician_name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub actual_cost: Option<Decimal>,
    #[schema(value_type = Option<f64>)]
    pub downtime_hours: Option<Decimal>,
    pub notes: Option<String>,
}

/// Open a maintenance record from a fail notification
#[derive(Debug, Deserialize, ToSchema)]
pub struct OpenFromNotification {
    pub priority: Option<MaintenancePriority>,
}

/// Maintenance list query
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct MaintenanceQuery {
    /// Filter by status; all records when omitted
    pub status: Option<MaintenanceStatus>,
}
