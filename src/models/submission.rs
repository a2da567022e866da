//! Checklist submission and response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::ResponseStatus;

/// One completed, persisted checklist
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Submission {
    pub id: Uuid,
    /// Badge number as typed by the operator, not re-validated on read
    pub badge_number: String,
    pub equipment_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    /// Computed once at submission time and never recomputed
    pub has_failures: bool,
}

/// Submission joined with its equipment unit, for the admin review list
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct SubmissionWithEquipment {
    pub id: Uuid,
    pub badge_number: String,
    pub equipment_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub has_failures: bool,
    pub equipment_name: String,
    pub unit_number: String,
}

/// One question's recorded answer within a submission
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ChecklistResponse {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub question_id: Uuid,
    pub status: ResponseStatus,
    pub recorded_at: DateTime<Utc>,
    /// Repair notes added by admins during review
    pub admin_notes: Option<String>,
}

/// Response joined with its question, for the admin detail view
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ResponseWithQuestion {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub question_id: Uuid,
    pub status: ResponseStatus,
    pub recorded_at: DateTime<Utc>,
    pub admin_notes: Option<String>,
    pub question_text: String,
    pub label: String,
    pub category: String,
}

/// One answer inside a submit request
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SubmitResponse {
    pub question_id: Uuid,
    pub status: ResponseStatus,
    /// Required for fail responses when the comment gate is enabled
    pub comment: Option<String>,
}

/// Submit checklist request
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SubmitChecklist {
    pub badge_number: String,
    pub equipment_id: Uuid,
    pub responses: Vec<SubmitResponse>,
}

/// Update response repair notes request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateResponseNotes {
    pub admin_notes: String,
}
