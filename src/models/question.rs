//! Checklist question model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One inspection item
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Question {
    pub id: Uuid,
    pub question_text: String,
    /// Grouping category, e.g. "Visual" or "Operational"
    pub category: String,
    /// Short display label, e.g. "Q3"
    pub label: String,
    /// Presentation order on the checklist
    pub sort_order: i32,
    /// Soft toggle; questions are never hard-deleted because historical
    /// responses reference them
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Create question request. Label defaults to "Q{sort_order}" and
/// category to "General" when omitted.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateQuestion {
    #[validate(length(min = 1, message = "Question text is required"))]
    pub question_text: String,
    pub label: Option<String>,
    pub category: Option<String>,
}

/// Update question request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateQuestion {
    #[validate(length(min = 1, message = "Question text is required"))]
    pub question_text: String,
    pub label: Option<String>,
}

/// Toggle question active flag request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetQuestionActive {
    pub is_active: bool,
}
