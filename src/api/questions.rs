//! Checklist questions and assignments API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::question::{CreateQuestion, Question, SetQuestionActive, UpdateQuestion},
};

use super::AdminPasscode;

/// List all questions including inactive
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    security(("admin_passcode" = [])),
    responses(
        (status = 200, description = "Questions in presentation order", body = Vec<Question>)
    )
)]
pub async fn list_questions(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
) -> AppResult<Json<Vec<Question>>> {
    let questions = state.services.questions.list_all().await?;
    Ok(Json(questions))
}

/// Create a question at the end of the checklist
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    security(("admin_passcode" = [])),
    request_body = CreateQuestion,
    responses(
        (status = 201, description = "Question created", body = Question)
    )
)]
pub async fn create_question(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Json(data): Json<CreateQuestion>,
) -> AppResult<(StatusCode, Json<Question>)> {
    let question = state.services.questions.create(&data).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

/// Update question text and label
#[utoipa::path(
    put,
    path = "/questions/{id}",
    tag = "questions",
    security(("admin_passcode" = [])),
    params(("id" = Uuid, Path, description = "Question ID")),
    request_body = UpdateQuestion,
    responses(
        (status = 200, description = "Question updated", body = Question)
    )
)]
pub async fn update_question(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateQuestion>,
) -> AppResult<Json<Question>> {
    let question = state.services.questions.update(id, &data).await?;
    Ok(Json(question))
}

/// Toggle a question's active flag
#[utoipa::path(
    put,
    path = "/questions/{id}/active",
    tag = "questions",
    security(("admin_passcode" = [])),
    params(("id" = Uuid, Path, description = "Question ID")),
    request_body = SetQuestionActive,
    responses(
        (status = 200, description = "Active flag updated", body = Question)
    )
)]
pub async fn set_question_active(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path(id): Path<Uuid>,
    Json(data): Json<SetQuestionActive>,
) -> AppResult<Json<Question>> {
    let question = state.services.questions.set_active(id, data.is_active).await?;
    Ok(Json(question))
}

/// Question IDs assigned to one unit
#[utoipa::path(
    get,
    path = "/equipment/{id}/assignments",
    tag = "questions",
    security(("admin_passcode" = [])),
    params(("id" = Uuid, Path, description = "Equipment unit ID")),
    responses(
        (status = 200, description = "Assigned question IDs", body = Vec<Uuid>)
    )
)]
pub async fn list_assignments(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Uuid>>> {
    let ids = state.services.questions.assignments_for_unit(id).await?;
    Ok(Json(ids))
}

/// Assign a question to a unit
#[utoipa::path(
    put,
    path = "/equipment/{id}/assignments/{question_id}",
    tag = "questions",
    security(("admin_passcode" = [])),
    params(
        ("id" = Uuid, Path, description = "Equipment unit ID"),
        ("question_id" = Uuid, Path, description = "Question ID")
    ),
    responses(
        (status = 204, description = "Question assigned"),
        (status = 409, description = "Question already assigned to this unit")
    )
)]
pub async fn assign_question(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path((id, question_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    state.services.questions.assign(id, question_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove a question assignment
#[utoipa::path(
    delete,
    path = "/equipment/{id}/assignments/{question_id}",
    tag = "questions",
    security(("admin_passcode" = [])),
    params(
        ("id" = Uuid, Path, description = "Equipment unit ID"),
        ("question_id" = Uuid, Path, description = "Question ID")
    ),
    responses(
        (status = 204, description = "Assignment removed")
    )
)]
pub async fn unassign_question(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path((id, question_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    state.services.questions.unassign(id, question_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
