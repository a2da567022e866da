//! Fail notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Admin-facing alert raised for one failed response at submission time.
///
/// Badge number, equipment name and question text are snapshots taken at
/// commit time so that later edits to the question or unit do not
/// retroactively alter the notification.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FailNotification {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub question_id: Uuid,
    pub badge_number: String,
    pub equipment_name: String,
    pub question_text: String,
    /// Operator's description of the issue, when the comment gate was on
    pub comment: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Notification row prepared by the submission workflow, inserted in the
/// same transaction as the submission itself
#[derive(Debug, Clone)]
pub struct NewFailNotification {
    pub question_id: Uuid,
    pub badge_number: String,
    pub equipment_name: String,
    pub question_text: String,
    pub comment: Option<String>,
}
