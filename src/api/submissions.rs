//! Checklist submission API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::submission::{
        ChecklistResponse, ResponseWithQuestion, SubmitChecklist, Submission,
        SubmissionWithEquipment, UpdateResponseNotes,
    },
};

use super::AdminPasscode;

/// Submit a completed checklist
#[utoipa::path(
    post,
    path = "/submissions",
    tag = "submissions",
    request_body = SubmitChecklist,
    responses(
        (status = 201, description = "Checklist persisted", body = Submission),
        (status = 400, description = "Incomplete checklist or missing fail comments"),
        (status = 422, description = "Badge not recognized under the enforce policy")
    )
)]
pub async fn submit_checklist(
    State(state): State<crate::AppState>,
    Json(data): Json<SubmitChecklist>,
) -> AppResult<(StatusCode, Json<Submission>)> {
    let submission = state.services.checklist.submit(data).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

/// List submissions, newest first
#[utoipa::path(
    get,
    path = "/submissions",
    tag = "submissions",
    security(("admin_passcode" = [])),
    responses(
        (status = 200, description = "All submissions with their equipment unit", body = Vec<SubmissionWithEquipment>)
    )
)]
pub async fn list_submissions(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
) -> AppResult<Json<Vec<SubmissionWithEquipment>>> {
    let submissions = state.services.checklist.list_submissions().await?;
    Ok(Json(submissions))
}

/// Responses of one submission with their question text
#[utoipa::path(
    get,
    path = "/submissions/{id}/responses",
    tag = "submissions",
    security(("admin_passcode" = [])),
    params(("id" = Uuid, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Responses in presentation order", body = Vec<ResponseWithQuestion>)
    )
)]
pub async fn list_submission_responses(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<ResponseWithQuestion>>> {
    let responses = state.services.checklist.submission_responses(id).await?;
    Ok(Json(responses))
}

/// Delete a submission and its responses
#[utoipa::path(
    delete,
    path = "/submissions/{id}",
    tag = "submissions",
    security(("admin_passcode" = [])),
    params(("id" = Uuid, Path, description = "Submission ID")),
    responses(
        (status = 204, description = "Submission deleted")
    )
)]
pub async fn delete_submission(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.checklist.delete_submission(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Set repair notes on one response
#[utoipa::path(
    put,
    path = "/responses/{id}/notes",
    tag = "submissions",
    security(("admin_passcode" = [])),
    params(("id" = Uuid, Path, description = "Response ID")),
    request_body = UpdateResponseNotes,
    responses(
        (status = 200, description = "Notes updated", body = ChecklistResponse)
    )
)]
pub async fn update_response_notes(
    State(state): State<crate::AppState>,
    _admin: AdminPasscode,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateResponseNotes>,
) -> AppResult<Json<ChecklistResponse>> {
    let response = state
        .services
        .checklist
        .update_response_notes(id, &data.admin_notes)
        .await?;
    Ok(Json(response))
}
